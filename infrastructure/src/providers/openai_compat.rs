//! OpenAI-compatible chat completions transport
//!
//! Minimal request/response protocol shared by the remote scoring engine,
//! the LLM critics, and the director. Providers exposing the
//! `/chat/completions` shape (OpenAI, Gemini's compatibility endpoint,
//! proxies) are all reachable through the same client.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from the provider transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("API key not set (env {0})")]
    MissingKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Completion contained no content")]
    EmptyCompletion,
}

/// Where and how to reach one provider model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderEndpoint {
    /// Base URL up to the API version segment
    pub base_url: String,
    /// Model identifier sent in the request body
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ProviderEndpoint {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            api_key_env: "ORACLE_API_KEY".to_string(),
        }
    }
}

impl ProviderEndpoint {
    /// Read the API key from the configured environment variable
    pub fn resolve_key(&self) -> Result<String, TransportError> {
        std::env::var(&self.api_key_env)
            .map_err(|_| TransportError::MissingKey(self.api_key_env.clone()))
    }

    /// Whether the key is present without reading it
    pub fn is_configured(&self) -> bool {
        std::env::var(&self.api_key_env).is_ok()
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Chat completion client for one provider endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: ProviderEndpoint,
}

impl ChatClient {
    pub fn new(endpoint: ProviderEndpoint, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &ProviderEndpoint {
        &self.endpoint
    }

    /// Send one system+user exchange and return the completion text.
    pub async fn complete(
        &self,
        system: Option<&str>,
        user: &str,
    ) -> Result<String, TransportError> {
        let key = self.endpoint.resolve_key()?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: user,
        });

        let request = ChatRequest {
            model: &self.endpoint.model,
            messages,
            temperature: 0.7,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.endpoint.base_url))
            .bearer_auth(key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(TransportError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_defaults() {
        let endpoint = ProviderEndpoint::default();
        assert!(endpoint.base_url.starts_with("https://"));
        assert_eq!(endpoint.api_key_env, "ORACLE_API_KEY");
    }

    #[test]
    fn test_missing_key_error_names_env_var() {
        let endpoint = ProviderEndpoint {
            api_key_env: "DEFINITELY_NOT_SET_KEY_VAR".to_string(),
            ..ProviderEndpoint::default()
        };
        let err = endpoint.resolve_key().unwrap_err();
        assert!(err.to_string().contains("DEFINITELY_NOT_SET_KEY_VAR"));
        assert!(!endpoint.is_configured());
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"choices": [{"message": {"content": "APPROVE"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("APPROVE")
        );
    }
}
