//! LLM-backed script director
//!
//! Produces draft and revision scripts from the composed director
//! prompts. The generator is deliberately thin: prompt assembly lives in
//! the domain templates, revision feedback routing in the orchestrator.

use crate::providers::{ChatClient, TransportError};
use async_trait::async_trait;
use oracle_application::ports::{DraftGenerator, GeneratorError};

/// Remote draft generator for the reflexion loop
pub struct LlmDirector {
    client: ChatClient,
}

impl LlmDirector {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DraftGenerator for LlmDirector {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.client
            .complete(None, prompt)
            .await
            .map_err(|e| match e {
                TransportError::MissingKey(env) => GeneratorError::Unavailable(env),
                other => GeneratorError::RequestFailed(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderEndpoint;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_key_maps_to_unavailable() {
        let endpoint = ProviderEndpoint {
            api_key_env: "LLM_DIRECTOR_TEST_UNSET_KEY".to_string(),
            ..ProviderEndpoint::default()
        };
        let director = LlmDirector::new(ChatClient::new(endpoint, Duration::from_secs(5)));

        let err = director.generate("draft an ad").await.unwrap_err();
        assert!(matches!(err, GeneratorError::Unavailable(_)));
    }
}
