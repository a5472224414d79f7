//! Ports (interfaces) consumed by the use cases
//!
//! Implementations live in the infrastructure layer and are injected at
//! wiring time, enabling substitution of fakes in tests.

pub mod critic;
pub mod generator;
pub mod knowledge;
pub mod scoring_engine;

pub use critic::{CriticError, CriticProvider};
pub use generator::{DraftGenerator, GeneratorError};
pub use knowledge::KnowledgeContext;
pub use scoring_engine::ScoringEngine;
