//! Trained CTR model stand-in
//!
//! Feature-driven scoring rules distilled from historical winners. The
//! base rate is trainable at runtime: feeding labeled samples through
//! [`CtrModel::train`] recalibrates the starting point for every later
//! prediction.

use async_trait::async_trait;
use oracle_application::ports::ScoringEngine;
use oracle_domain::{EngineOutcome, EnginePrediction, FeatureMap};
use tokio::sync::RwLock;
use tracing::debug;

/// Default probability before any feature adjustment
const DEFAULT_BASE_RATE: f64 = 0.5;

/// Feature key carrying the observed outcome in a training sample
const LABEL_KEY: &str = "outcome_score";

/// Heaviest voice in the ensemble: a deterministic stand-in for the
/// trained click-through model, scoring from the same feature signals the
/// model was fit on.
pub struct CtrModel {
    weight: f64,
    base_rate: RwLock<f64>,
}

impl CtrModel {
    pub fn new(weight: f64) -> Self {
        Self {
            weight,
            base_rate: RwLock::new(DEFAULT_BASE_RATE),
        }
    }

    pub async fn base_rate(&self) -> f64 {
        *self.base_rate.read().await
    }
}

impl Default for CtrModel {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[async_trait]
impl ScoringEngine for CtrModel {
    fn name(&self) -> &str {
        "ctr-model"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    async fn predict(&self, features: &FeatureMap) -> EngineOutcome {
        let mut score = *self.base_rate.read().await;
        let mut confidence: f64 = 0.7;
        let mut reasons: Vec<String> = Vec::new();

        // Hook effectiveness is the single strongest signal
        let hook_eff = features.number("hook_effectiveness", 5.0);
        if hook_eff >= 8.0 {
            score += 0.15;
            reasons.push("Strong hook".to_string());
        } else if hook_eff >= 6.0 {
            score += 0.08;
        } else if hook_eff < 4.0 {
            score -= 0.10;
            reasons.push("Weak hook".to_string());
        }

        if features.flag("has_transformation") {
            let believability = features.number("transformation_believability", 5.0);
            if believability >= 7.0 {
                score += 0.12;
                reasons.push("Believable transformation".to_string());
            } else if believability >= 5.0 {
                score += 0.05;
            }
        }

        let triggers = features.number("num_emotional_triggers", 0.0);
        if triggers >= 3.0 {
            score += 0.08;
            reasons.push(format!("{} emotional triggers", triggers as u32));
        }

        let cta = features.number("cta_strength", 0.0);
        if cta >= 7.0 {
            score += 0.08;
            reasons.push("Strong CTA".to_string());
        } else if cta < 3.0 && features.flag("has_cta") {
            score -= 0.05;
            reasons.push("Weak CTA".to_string());
        }

        if features.flag("has_voiceover") {
            score += 0.04;
        }

        let quality_ratio = features.number("quality_ratio", 1.0);
        if quality_ratio >= 2.0 {
            score += 0.05;
        } else if quality_ratio < 0.5 {
            score -= 0.05;
        }

        let patterns = features.number("num_winning_patterns_matched", 0.0);
        if patterns >= 2.0 {
            score += 0.10;
            confidence += 0.1;
            reasons.push(format!("Matches {} winning patterns", patterns as u32));
        }

        let reasoning = if reasons.is_empty() {
            "Standard prediction based on features".to_string()
        } else {
            reasons.join("; ")
        };

        debug!(score, confidence, "CTR model scored features");
        EngineOutcome::scored(EnginePrediction::new(
            score,
            confidence.clamp(0.4, 0.95),
            reasoning,
        ))
    }

    async fn train(&self, samples: &[FeatureMap]) {
        let labeled: Vec<f64> = samples
            .iter()
            .filter(|s| s.number(LABEL_KEY, -1.0) >= 0.0)
            .map(|s| s.number(LABEL_KEY, 0.0).clamp(0.0, 1.0))
            .collect();
        if labeled.is_empty() {
            return;
        }

        let mean = labeled.iter().sum::<f64>() / labeled.len() as f64;
        let mut base = self.base_rate.write().await;
        // Exponential smoothing keeps one batch from swinging the model
        *base = 0.8 * *base + 0.2 * mean;
        debug!(samples = labeled.len(), base_rate = *base, "CTR model recalibrated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_features() -> FeatureMap {
        FeatureMap::new()
            .with("hook_effectiveness", 9.0)
            .with("has_transformation", true)
            .with("transformation_believability", 8.0)
            .with("num_emotional_triggers", 3.0)
            .with("cta_strength", 8.0)
            .with("has_voiceover", true)
            .with("quality_ratio", 2.5)
            .with("num_winning_patterns_matched", 2.0)
    }

    #[tokio::test]
    async fn test_strong_features_score_high() {
        let engine = CtrModel::default();
        let outcome = engine.predict(&strong_features()).await;

        assert!(!outcome.is_degraded());
        // 0.5 + 0.15 + 0.12 + 0.08 + 0.08 + 0.04 + 0.05 + 0.10 = 1.12 -> 1.0
        assert_eq!(outcome.prediction().score, 1.0);
        // 0.7 + 0.1 pattern bonus
        assert!((outcome.prediction().confidence - 0.8).abs() < 1e-9);
        assert!(outcome.prediction().reasoning.contains("Strong hook"));
        assert!(outcome.prediction().reasoning.contains("2 winning patterns"));
    }

    #[tokio::test]
    async fn test_weak_features_score_low() {
        let features = FeatureMap::new()
            .with("hook_effectiveness", 2.0)
            .with("cta_strength", 1.0)
            .with("has_cta", true)
            .with("quality_ratio", 0.3);
        let outcome = CtrModel::default().predict(&features).await;

        // 0.5 - 0.10 - 0.05 - 0.05 = 0.30
        assert!((outcome.prediction().score - 0.30).abs() < 1e-9);
        assert!(outcome.prediction().reasoning.contains("Weak hook"));
    }

    #[tokio::test]
    async fn test_empty_features_give_neutral_reasoning() {
        let outcome = CtrModel::default().predict(&FeatureMap::new()).await;
        assert_eq!(
            outcome.prediction().reasoning,
            "Standard prediction based on features"
        );
    }

    #[tokio::test]
    async fn test_prediction_is_deterministic() {
        let engine = CtrModel::default();
        let features = strong_features();
        let first = engine.predict(&features).await;
        let second = engine.predict(&features).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_train_shifts_base_rate_toward_labels() {
        let engine = CtrModel::default();
        let samples = vec![
            FeatureMap::new().with("outcome_score", 1.0),
            FeatureMap::new().with("outcome_score", 1.0),
        ];
        engine.train(&samples).await;

        // 0.8 * 0.5 + 0.2 * 1.0 = 0.6
        assert!((engine.base_rate().await - 0.6).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_train_ignores_unlabeled_samples() {
        let engine = CtrModel::default();
        engine
            .train(&[FeatureMap::new().with("hook_effectiveness", 9.0)])
            .await;
        assert_eq!(engine.base_rate().await, DEFAULT_BASE_RATE);
    }
}
