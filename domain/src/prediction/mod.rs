//! Performance prediction domain
//!
//! Types and pure rules behind the ensemble aggregator: per-engine
//! predictions with explicit degradation, the aggregate result, the ROAS
//! projection curve, and the deterministic explainability rules
//! (sub-scores, recommendations, narrative).

pub mod engine;
pub mod ensemble;
pub mod narrative;
pub mod recommendations;
pub mod roas;
pub mod subscores;

pub use engine::{EngineOutcome, EnginePrediction, EngineReport};
pub use ensemble::{DEFAULT_FINAL_SCORE, EnsemblePrediction, RoasPrediction, SubScores};
pub use roas::{ConfidenceLevel, RoasCurve, UncertaintyBand};
