//! Per-engine prediction primitives
//!
//! Every scoring source produces an [`EnginePrediction`]; failures are not
//! exceptions but an explicit [`EngineOutcome::Degraded`] carrying the
//! neutral fallback, so the ensemble can proceed with reduced confidence.

use serde::{Deserialize, Serialize};

/// Neutral score used when an engine cannot produce a real prediction
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Confidence attached to a degraded (fallback) prediction
pub const DEGRADED_CONFIDENCE: f64 = 0.3;

/// One scoring source's opinion of a feature snapshot
///
/// Bounds are enforced by clamping, never by raising.
///
/// # Example
///
/// ```
/// use oracle_domain::prediction::engine::EnginePrediction;
///
/// let p = EnginePrediction::new(1.4, -0.2, "clamped");
/// assert_eq!(p.score, 1.0);
/// assert_eq!(p.confidence, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnginePrediction {
    /// Prediction score in [0, 1]
    pub score: f64,
    /// Confidence level in [0, 1]
    pub confidence: f64,
    /// Why this engine gave this score
    pub reasoning: String,
}

impl EnginePrediction {
    /// Create a prediction, clamping score and confidence into [0, 1]
    pub fn new(score: f64, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: reasoning.into(),
        }
    }

    /// The neutral prediction substituted for unavailable engines
    pub fn neutral(reasoning: impl Into<String>) -> Self {
        Self::new(NEUTRAL_SCORE, DEGRADED_CONFIDENCE, reasoning)
    }
}

/// Result of one engine call
///
/// `Degraded` is the structural form of the "never throws" contract: any
/// internal failure (missing credentials, unreachable dependency, timeout)
/// is converted into a neutral prediction plus the reason it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineOutcome {
    /// The engine produced a real prediction
    Scored(EnginePrediction),
    /// The engine fell back to its neutral prediction
    Degraded {
        prediction: EnginePrediction,
        reason: String,
    },
}

impl EngineOutcome {
    /// Wrap a real prediction
    pub fn scored(prediction: EnginePrediction) -> Self {
        EngineOutcome::Scored(prediction)
    }

    /// Build the neutral fallback outcome for a failed call
    pub fn degraded(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        EngineOutcome::Degraded {
            prediction: EnginePrediction::neutral(format!("degraded: {reason}")),
            reason,
        }
    }

    /// The prediction to feed into aggregation, real or fallback
    pub fn prediction(&self) -> &EnginePrediction {
        match self {
            EngineOutcome::Scored(p) => p,
            EngineOutcome::Degraded { prediction, .. } => prediction,
        }
    }

    /// Whether this outcome is a fallback
    pub fn is_degraded(&self) -> bool {
        matches!(self, EngineOutcome::Degraded { .. })
    }
}

/// One engine's contribution to an ensemble prediction, as reported back
/// to callers for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReport {
    /// Engine name (unique within the registered set)
    pub engine: String,
    /// Configured relative weight of this engine
    pub weight: f64,
    /// What the engine call produced
    pub outcome: EngineOutcome,
}

impl EngineReport {
    pub fn new(engine: impl Into<String>, weight: f64, outcome: EngineOutcome) -> Self {
        Self {
            engine: engine.into(),
            weight,
            outcome,
        }
    }

    /// Effective weight used in aggregation: configured weight scaled by
    /// the engine's own confidence.
    pub fn effective_weight(&self) -> f64 {
        self.weight * self.outcome.prediction().confidence
    }
}
