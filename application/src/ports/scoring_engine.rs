//! Scoring engine port
//!
//! Uniform adapter contract around one scoring source: a trained model, a
//! rule heuristic, or a remote critic. Implementations (adapters) live in
//! the infrastructure layer and are registered in a fixed, test-visible
//! list at construction time.

use async_trait::async_trait;
use oracle_domain::{EngineOutcome, FeatureMap};

/// One scoring source in the ensemble
///
/// `predict` is total: any internal failure (missing credentials,
/// unavailable dependency, network error) must be converted into a
/// [`EngineOutcome::Degraded`] neutral prediction so the ensemble proceeds
/// with reduced confidence rather than failing outright.
#[async_trait]
pub trait ScoringEngine: Send + Sync {
    /// Unique engine name
    fn name(&self) -> &str;

    /// Configured relative importance, positive
    fn weight(&self) -> f64;

    /// Score one feature snapshot. Never fails.
    async fn predict(&self, features: &FeatureMap) -> EngineOutcome;

    /// Online recalibration hook. Fire-and-forget: has no effect on
    /// concurrent `predict` calls (read-mostly model). Default no-op.
    async fn train(&self, _samples: &[FeatureMap]) {}
}
