//! Scoring engine adapters
//!
//! Concrete [`ScoringEngine`](oracle_application::ports::ScoringEngine)
//! implementations fed into the ensemble: the trained CTR stand-in, two
//! cheap heuristic signals, and an optional remote LLM voice.

pub mod ctr_model;
pub mod heuristics;
pub mod remote;

pub use ctr_model::CtrModel;
pub use heuristics::{ConversionSignal, HookSignal};
pub use remote::RemoteModel;
