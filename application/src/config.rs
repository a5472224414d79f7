//! Use case configuration
//!
//! Read-only parameter sets injected into the aggregator, council, and
//! orchestrator. All values have documented defaults; the infrastructure
//! layer populates them from configuration files.

use oracle_domain::{RoasCurve, UncertaintyBand};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ensemble aggregator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Score-to-ROAS projection anchors
    pub roas_curve: RoasCurve,
    /// Confidence interval width model
    pub uncertainty: UncertaintyBand,
    /// Per-engine call timeout in seconds
    pub call_timeout_secs: u64,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            roas_curve: RoasCurve::default(),
            uncertainty: UncertaintyBand::default(),
            call_timeout_secs: 30,
        }
    }
}

impl EnsembleConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

/// Council evaluator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouncilConfig {
    /// A draft is approved iff its score strictly exceeds this
    pub approval_threshold: f64,
    /// Per-critic call timeout in seconds
    pub call_timeout_secs: u64,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self {
            approval_threshold: 85.0,
            call_timeout_secs: 30,
        }
    }
}

impl CouncilConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

/// Reflexion orchestrator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflexionConfig {
    /// Hard upper bound on evaluations per run; the loop is provably
    /// finite regardless of provider behavior
    pub max_turns: usize,
}

impl Default for ReflexionConfig {
    fn default() -> Self {
        Self { max_turns: 3 }
    }
}
