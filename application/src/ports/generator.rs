//! Draft generator port
//!
//! The generation capability consumed by the reflexion orchestrator. It is
//! injected, never owned; a missing generator is an orchestration
//! precondition failure, not a per-turn error.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a generation call can produce
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generator not configured: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Text generation capability
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    /// Produce a script draft (or revision) from a prompt
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
