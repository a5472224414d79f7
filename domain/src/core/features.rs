//! Feature map value object
//!
//! Scoring engines consume a string-keyed mapping of scalar, boolean, and
//! text features prepared by an upstream analysis subsystem. The core does
//! not perform feature extraction; it only reads the snapshot it is given.
//!
//! Missing keys are absorbed by defaulting accessors rather than errors, so
//! a degenerate feature map still produces a well-formed prediction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single feature value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Numeric feature (scores, counts, durations)
    Number(f64),
    /// Boolean flag (has_voiceover, has_transformation)
    Flag(bool),
    /// Free-text feature (hook_type, dominant_emotion)
    Text(String),
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Number(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Flag(v)
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Text(v.to_string())
    }
}

/// String-keyed feature snapshot for one creative variant
///
/// # Example
///
/// ```
/// use oracle_domain::core::features::FeatureMap;
///
/// let features = FeatureMap::new()
///     .with("hook_effectiveness", 8.0)
///     .with("has_voiceover", true)
///     .with("hook_type", "Visual Shock");
///
/// assert_eq!(features.number("hook_effectiveness", 5.0), 8.0);
/// assert_eq!(features.number("missing_key", 5.0), 5.0);
/// assert!(features.flag("has_voiceover"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureMap {
    values: BTreeMap<String, FeatureValue>,
}

impl FeatureMap {
    /// Create an empty feature map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Insert a feature value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Numeric feature, or `default` when missing or non-numeric.
    ///
    /// Boolean flags coerce to 1.0/0.0 so upstream extractors may encode
    /// flags either way.
    pub fn number(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(FeatureValue::Number(n)) => *n,
            Some(FeatureValue::Flag(b)) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            _ => default,
        }
    }

    /// Boolean feature; missing keys and non-flags read as false.
    ///
    /// Numeric values coerce truthily (non-zero = set).
    pub fn flag(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(FeatureValue::Flag(b)) => *b,
            Some(FeatureValue::Number(n)) => *n != 0.0,
            _ => false,
        }
    }

    /// Text feature, or empty string when missing
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(FeatureValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    /// Number of features present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no features
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_default() {
        let features = FeatureMap::new().with("cta_strength", 7.0);
        assert_eq!(features.number("cta_strength", 0.0), 7.0);
        assert_eq!(features.number("absent", 5.0), 5.0);
    }

    #[test]
    fn test_flag_coercion() {
        let features = FeatureMap::new()
            .with("has_music", true)
            .with("has_transformation", 1.0);
        assert!(features.flag("has_music"));
        assert!(features.flag("has_transformation"));
        assert!(!features.flag("absent"));
    }

    #[test]
    fn test_flag_to_number_coercion() {
        let features = FeatureMap::new().with("has_cta", true);
        assert_eq!(features.number("has_cta", 0.0), 1.0);
    }

    #[test]
    fn test_text_default_empty() {
        let features = FeatureMap::new().with("hook_type", "Question");
        assert_eq!(features.text("hook_type"), "Question");
        assert_eq!(features.text("absent"), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let features = FeatureMap::new()
            .with("hook_effectiveness", 8.0)
            .with("has_voiceover", true)
            .with("dominant_emotion", "Inspiration");

        let json = serde_json::to_string(&features).unwrap();
        let back: FeatureMap = serde_json::from_str(&json).unwrap();
        assert_eq!(features, back);
    }

    #[test]
    fn test_deserialize_plain_object() {
        let json = r#"{"hook_effectiveness": 8, "has_cta": true, "niche": "fitness"}"#;
        let features: FeatureMap = serde_json::from_str(json).unwrap();
        assert_eq!(features.number("hook_effectiveness", 0.0), 8.0);
        assert!(features.flag("has_cta"));
        assert_eq!(features.text("niche"), "fitness");
    }
}
