//! LLM-backed council critic
//!
//! One remote judge on the panel. The critique prompt asks for the strict
//! JSON protocol; responses that drift are salvaged by the domain parser,
//! and transport failures surface as [`CriticError`] so the evaluator can
//! substitute this seat's fallback score.

use crate::providers::{ChatClient, TransportError};
use async_trait::async_trait;
use oracle_application::ports::{CriticError, CriticProvider};
use oracle_domain::{
    CouncilCritique, DirectorPrompt, FeatureMap, parse_critique_score, parse_rejection_feedback,
};
use tracing::debug;

/// Remote LLM judge for one council seat
pub struct LlmCritic {
    name: String,
    weight: f64,
    fallback_score: f64,
    niche: String,
    client: ChatClient,
}

impl LlmCritic {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        fallback_score: f64,
        niche: impl Into<String>,
        client: ChatClient,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            fallback_score,
            niche: niche.into(),
            client,
        }
    }

    /// Pull the human-readable feedback out of a critic response.
    ///
    /// Prefers the JSON `feedback` field, then the `REJECT: ...` tail,
    /// then the raw response.
    fn extract_feedback(response: &str) -> String {
        if let Some(start) = response.find('{')
            && let Some(end) = response[start..].rfind('}')
            && let Ok(parsed) =
                serde_json::from_str::<serde_json::Value>(&response[start..start + end + 1])
            && let Some(feedback) = parsed.get("feedback").and_then(|v| v.as_str())
        {
            return feedback.to_string();
        }
        if let Some(feedback) = parse_rejection_feedback(response) {
            return feedback;
        }
        response.trim().to_string()
    }
}

#[async_trait]
impl CriticProvider for LlmCritic {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn fallback_score(&self) -> f64 {
        self.fallback_score
    }

    async fn critique(
        &self,
        script: &str,
        _visual_features: Option<&FeatureMap>,
    ) -> Result<CouncilCritique, CriticError> {
        let system = DirectorPrompt::critic_system(&self.niche);
        let request = DirectorPrompt::critique_request(script);

        let response = self
            .client
            .complete(Some(&system), &request)
            .await
            .map_err(|e| match e {
                TransportError::MissingKey(env) => CriticError::Unavailable(env),
                TransportError::EmptyCompletion => {
                    CriticError::MalformedResponse("empty completion".to_string())
                }
                other => CriticError::RequestFailed(other.to_string()),
            })?;

        let score = parse_critique_score(&response, self.fallback_score);
        let feedback = Self::extract_feedback(&response);
        debug!(critic = %self.name, score, "Critic responded");
        Ok(CouncilCritique::new(&self.name, score, feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderEndpoint;
    use std::time::Duration;

    #[test]
    fn test_extract_feedback_prefers_json_field() {
        let response = r#"{"score": 40, "feedback": "REJECT: Weak hook. Fix scene 1."}"#;
        assert_eq!(
            LlmCritic::extract_feedback(response),
            "REJECT: Weak hook. Fix scene 1."
        );
    }

    #[test]
    fn test_extract_feedback_falls_back_to_reject_tail() {
        assert_eq!(
            LlmCritic::extract_feedback("REJECT: No visceral pain point."),
            "No visceral pain point."
        );
    }

    #[test]
    fn test_extract_feedback_keeps_raw_text() {
        assert_eq!(
            LlmCritic::extract_feedback("  Solid structure overall.  "),
            "Solid structure overall."
        );
    }

    #[tokio::test]
    async fn test_missing_key_maps_to_unavailable() {
        let endpoint = ProviderEndpoint {
            api_key_env: "LLM_CRITIC_TEST_UNSET_KEY".to_string(),
            ..ProviderEndpoint::default()
        };
        let critic = LlmCritic::new(
            "gemini",
            0.4,
            70.0,
            "fitness",
            ChatClient::new(endpoint, Duration::from_secs(5)),
        );

        let err = critic.critique("script", None).await.unwrap_err();
        assert!(matches!(err, CriticError::Unavailable(_)));
    }
}
