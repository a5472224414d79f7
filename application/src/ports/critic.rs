//! Critic provider port
//!
//! One seat on the council panel. Unlike scoring engines, critics may fail;
//! the council evaluator substitutes the provider's own calibrated fallback
//! score so one unavailable judge never blocks or nulls the others.

use async_trait::async_trait;
use oracle_domain::{CouncilCritique, FeatureMap};
use thiserror::Error;

/// Errors a critic call can produce
#[derive(Error, Debug)]
pub enum CriticError {
    #[error("Provider not configured: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// One judge on the council
#[async_trait]
pub trait CriticProvider: Send + Sync {
    /// Judge label used in the verdict breakdown
    fn name(&self) -> &str;

    /// Fixed panel weight. The evaluator validates the panel sums to 1.0.
    fn weight(&self) -> f64;

    /// Calibrated neutral score substituted when this judge is unreachable
    fn fallback_score(&self) -> f64;

    /// Score a script draft, optionally with visual features for
    /// data-driven seats
    async fn critique(
        &self,
        script: &str,
        visual_features: Option<&FeatureMap>,
    ) -> Result<CouncilCritique, CriticError>;
}
