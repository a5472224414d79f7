//! ROAS projection curve and uncertainty bands
//!
//! Maps an ensemble score to a return-on-ad-spend estimate with a
//! confidence interval. The anchor constants are heuristics calibrated
//! against historical campaign outcomes; they are configuration, not
//! algorithm, and should be retuned as real outcome data accumulates.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Qualitative confidence label derived from interval width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::Low => write!(f, "low"),
            ConfidenceLevel::Medium => write!(f, "medium"),
            ConfidenceLevel::High => write!(f, "high"),
        }
    }
}

/// Two-segment linear score-to-ROAS mapping
///
/// Anchored at the historical-average ROAS for a score of 50. Above 50 the
/// projection rises linearly toward the top-performer ceiling at 100;
/// below 50 it falls linearly toward the floor at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoasCurve {
    /// ROAS projected for a score of 0
    pub floor: f64,
    /// Historical-average ROAS, projected for a score of 50
    pub baseline: f64,
    /// Top-performer ROAS, projected for a score of 100
    pub ceiling: f64,
}

impl Default for RoasCurve {
    fn default() -> Self {
        Self {
            floor: 0.8,
            baseline: 2.4,
            ceiling: 5.0,
        }
    }
}

impl RoasCurve {
    /// Check the anchor ordering invariant: `0 <= floor <= baseline <=
    /// ceiling`. An inverted curve would flip the confidence interval
    /// around the projection.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.floor < 0.0 || self.floor > self.baseline || self.baseline > self.ceiling {
            return Err(DomainError::InvalidRoasCurve {
                floor: self.floor,
                baseline: self.baseline,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }

    /// Project a final score (0-100) onto the ROAS curve
    pub fn project(&self, final_score: f64) -> f64 {
        let score = final_score.clamp(0.0, 100.0);
        if score >= 50.0 {
            self.baseline + (score - 50.0) / 50.0 * (self.ceiling - self.baseline)
        } else {
            self.floor + (score / 50.0) * (self.baseline - self.floor)
        }
    }
}

/// Confidence-interval width model
///
/// Starts from a fixed base uncertainty and tightens per matched historical
/// winning pattern, clamped into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyBand {
    /// Interval half-width with no pattern evidence
    pub base: f64,
    /// Reduction per matched historical pattern
    pub per_pattern_reduction: f64,
    /// Tightest permitted interval
    pub min: f64,
    /// Widest permitted interval
    pub max: f64,
}

impl Default for UncertaintyBand {
    fn default() -> Self {
        Self {
            base: 0.4,
            per_pattern_reduction: 0.05,
            min: 0.15,
            max: 0.5,
        }
    }
}

impl UncertaintyBand {
    /// Interval width given the number of matched historical patterns
    pub fn width(&self, patterns_matched: u32) -> f64 {
        let width = self.base - patterns_matched as f64 * self.per_pattern_reduction;
        width.clamp(self.min, self.max)
    }

    /// Qualitative label for a given width
    pub fn level(&self, width: f64) -> ConfidenceLevel {
        if width < 0.25 {
            ConfidenceLevel::High
        } else if width < 0.35 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_anchors() {
        let curve = RoasCurve::default();
        assert_eq!(curve.project(0.0), 0.8);
        assert_eq!(curve.project(50.0), 2.4);
        assert_eq!(curve.project(100.0), 5.0);
    }

    #[test]
    fn test_curve_is_piecewise_linear() {
        let curve = RoasCurve::default();
        // Midpoint of upper segment
        assert!((curve.project(75.0) - 3.7).abs() < 1e-9);
        // Midpoint of lower segment
        assert!((curve.project(25.0) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_curve_clamps_out_of_range_scores() {
        let curve = RoasCurve::default();
        assert_eq!(curve.project(150.0), curve.project(100.0));
        assert_eq!(curve.project(-10.0), curve.project(0.0));
    }

    #[test]
    fn test_curve_validation() {
        assert!(RoasCurve::default().validate().is_ok());

        let inverted = RoasCurve {
            floor: 5.0,
            baseline: 2.4,
            ceiling: 0.8,
        };
        assert!(matches!(
            inverted.validate(),
            Err(DomainError::InvalidRoasCurve { .. })
        ));

        let negative = RoasCurve {
            floor: -1.0,
            ..RoasCurve::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_uncertainty_tightens_with_patterns() {
        let band = UncertaintyBand::default();
        assert_eq!(band.width(0), 0.4);
        assert_eq!(band.width(2), 0.3);
        // Clamped at min
        assert_eq!(band.width(10), 0.15);
    }

    #[test]
    fn test_uncertainty_levels() {
        let band = UncertaintyBand::default();
        assert_eq!(band.level(0.2), ConfidenceLevel::High);
        assert_eq!(band.level(0.3), ConfidenceLevel::Medium);
        assert_eq!(band.level(0.4), ConfidenceLevel::Low);
    }
}
