//! Application layer for ad-oracle
//!
//! Use cases and ports. The use cases orchestrate the domain logic; the
//! ports define the interfaces implemented by infrastructure adapters and
//! injected at wiring time.

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::{CouncilConfig, EnsembleConfig, ReflexionConfig};
pub use ports::{
    CriticError, CriticProvider, DraftGenerator, GeneratorError, KnowledgeContext, ScoringEngine,
};
pub use use_cases::{EvaluateScript, PredictPerformance, ReflexionOutcome, RunReflexion};
