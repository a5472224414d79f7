//! Use cases
//!
//! Application services orchestrating the domain: ensemble prediction,
//! council evaluation, and the reflexion loop. Each receives its
//! collaborators through constructor injection.

pub mod evaluate_script;
pub mod predict_performance;
pub mod run_reflexion;

pub use evaluate_script::EvaluateScript;
pub use predict_performance::PredictPerformance;
pub use run_reflexion::{ReflexionOutcome, RunReflexion};
