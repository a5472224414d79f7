//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These surface only at construction time (building a council panel,
/// configuring the reflexion loop). Prediction and evaluation paths are
/// total: they degrade to documented defaults instead of returning errors.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Council panel is empty")]
    EmptyPanel,

    #[error("Council weights must sum to 1.0, got {sum}")]
    WeightsNotNormalized { sum: f64 },

    #[error("Engine weight must be positive: {name} has weight {weight}")]
    NonPositiveWeight { name: String, weight: f64 },

    #[error("max_turns must be greater than zero")]
    ZeroMaxTurns,

    #[error("Invalid ROAS curve: floor {floor} must be below baseline {baseline} below ceiling {ceiling}")]
    InvalidRoasCurve {
        floor: f64,
        baseline: f64,
        ceiling: f64,
    },
}
