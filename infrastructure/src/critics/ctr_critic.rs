//! Data-driven council seat
//!
//! Reuses the CTR scoring engine as a judge: when the caller supplies
//! visual features alongside the script, the trained model's 0-1 score is
//! rescaled onto the council's 0-100 axis. Without features this seat is
//! unavailable and the evaluator falls back to its neutral score.

use crate::engines::CtrModel;
use async_trait::async_trait;
use oracle_application::ports::{CriticError, CriticProvider, ScoringEngine};
use oracle_domain::{CouncilCritique, FeatureMap};
use std::sync::Arc;

/// Council seat backed by the CTR model instead of an LLM
pub struct CtrCritic {
    weight: f64,
    fallback_score: f64,
    model: Arc<CtrModel>,
}

impl CtrCritic {
    pub fn new(weight: f64, fallback_score: f64, model: Arc<CtrModel>) -> Self {
        Self {
            weight,
            fallback_score,
            model,
        }
    }
}

#[async_trait]
impl CriticProvider for CtrCritic {
    fn name(&self) -> &str {
        "deep-ctr"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn fallback_score(&self) -> f64 {
        self.fallback_score
    }

    async fn critique(
        &self,
        _script: &str,
        visual_features: Option<&FeatureMap>,
    ) -> Result<CouncilCritique, CriticError> {
        let features = visual_features.ok_or_else(|| {
            CriticError::Unavailable("no visual features supplied".to_string())
        })?;

        let outcome = self.model.predict(features).await;
        let prediction = outcome.prediction();
        Ok(CouncilCritique::new(
            self.name(),
            prediction.score * 100.0,
            prediction.reasoning.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rescales_model_score_to_council_axis() {
        let critic = CtrCritic::new(0.10, 50.0, Arc::new(CtrModel::default()));
        let features = FeatureMap::new()
            .with("hook_effectiveness", 9.0)
            .with("cta_strength", 8.0);

        let critique = critic.critique("script", Some(&features)).await.unwrap();

        // 0.5 + 0.15 + 0.08 = 0.73 -> 73.0
        assert!((critique.score - 73.0).abs() < 1e-9);
        assert!(critique.feedback.contains("Strong hook"));
    }

    #[tokio::test]
    async fn test_unavailable_without_features() {
        let critic = CtrCritic::new(0.10, 50.0, Arc::new(CtrModel::default()));
        let err = critic.critique("script", None).await.unwrap_err();
        assert!(matches!(err, CriticError::Unavailable(_)));
    }
}
