//! Remote zero-shot scoring engine
//!
//! Asks an LLM provider to rate the feature snapshot directly. Any
//! transport failure (missing key, network, bad payload) degrades the
//! outcome instead of failing the ensemble.

use crate::providers::ChatClient;
use async_trait::async_trait;
use oracle_application::ports::ScoringEngine;
use oracle_domain::{EngineOutcome, EnginePrediction, FeatureMap, parse_critique_score};
use tracing::warn;

const SYSTEM_PROMPT: &str = "You are an expert direct-response ad analyst. \
    Given structured features extracted from a video ad, rate the likelihood \
    that the ad performs above the account average. \
    Respond with JSON: {\"score\": <0-100>, \"feedback\": \"<one sentence>\"}.";

/// LLM-backed engine giving a zero-shot read on the full feature snapshot
pub struct RemoteModel {
    name: String,
    weight: f64,
    client: ChatClient,
}

impl RemoteModel {
    pub fn new(name: impl Into<String>, weight: f64, client: ChatClient) -> Self {
        Self {
            name: name.into(),
            weight,
            client,
        }
    }
}

#[async_trait]
impl ScoringEngine for RemoteModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    async fn predict(&self, features: &FeatureMap) -> EngineOutcome {
        let snapshot = match serde_json::to_string_pretty(features) {
            Ok(json) => json,
            Err(e) => return EngineOutcome::degraded(format!("feature serialization: {e}")),
        };
        let request = format!("Ad features:\n{snapshot}\n\nRate this ad.");

        match self.client.complete(Some(SYSTEM_PROMPT), &request).await {
            Ok(response) => {
                // No parseable score reads as the neutral midpoint
                let score = parse_critique_score(&response, 50.0) / 100.0;
                let reasoning = response.lines().next().unwrap_or("").trim().to_string();
                EngineOutcome::scored(EnginePrediction::new(score, 0.7, reasoning))
            }
            Err(e) => {
                warn!(engine = %self.name, error = %e, "Remote engine call failed");
                EngineOutcome::degraded(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderEndpoint;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_key_degrades_with_reason() {
        let endpoint = ProviderEndpoint {
            api_key_env: "REMOTE_MODEL_TEST_UNSET_KEY".to_string(),
            ..ProviderEndpoint::default()
        };
        let engine = RemoteModel::new(
            "remote-llm",
            1.4,
            ChatClient::new(endpoint, Duration::from_secs(5)),
        );

        let outcome = engine.predict(&FeatureMap::new()).await;

        assert!(outcome.is_degraded());
        assert_eq!(outcome.prediction().score, 0.5);
        match outcome {
            EngineOutcome::Degraded { reason, .. } => {
                assert!(reason.contains("REMOTE_MODEL_TEST_UNSET_KEY"));
            }
            _ => panic!("expected degraded"),
        }
    }
}
