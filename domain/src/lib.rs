//! Domain layer for ad-oracle
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Ensemble
//!
//! Multiple independent scoring sources (trained models, heuristics, critic
//! providers) are normalized and weighted into one calibrated performance
//! prediction with a ROAS confidence interval.
//!
//! ## Council
//!
//! A small fixed panel of critics scores textual script drafts with fixed
//! weights and an approval threshold.
//!
//! ## Reflexion
//!
//! A bounded generate -> critique -> revise loop that converges a draft
//! toward the council's approval threshold, or terminates after a fixed
//! number of turns.

pub mod core;
pub mod council;
pub mod prediction;
pub mod prompt;
pub mod reflexion;

// Re-export commonly used types
pub use core::{DomainError, FeatureMap, FeatureValue};
pub use council::{
    CouncilCritique, CouncilVerdict, Verdict, parse_critique_score, parse_rejection_feedback,
};
pub use prediction::{
    ConfidenceLevel, DEFAULT_FINAL_SCORE, EngineOutcome, EnginePrediction, EngineReport,
    EnsemblePrediction, RoasCurve, RoasPrediction, SubScores, UncertaintyBand,
};
pub use prompt::DirectorPrompt;
pub use reflexion::{ReflexionSession, ReflexionStatus, ReflexionTurn};
