//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! The use case parameter sets deserialize directly into the application
//! layer's config types; provider and panel wiring is infrastructure-only.

use crate::providers::ProviderEndpoint;
use oracle_application::config::{CouncilConfig, EnsembleConfig, ReflexionConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("call_timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("panel seat name cannot be empty")]
    EmptySeatName,

    #[error("panel seat weights must sum to 1.0 (got {0})")]
    SeatWeightsNotNormalized(f64),

    #[error("engine weights must be positive (got {0})")]
    NonPositiveEngineWeight(f64),

    #[error("roas curve anchors must satisfy 0 <= floor <= baseline <= ceiling")]
    InvalidRoasCurve,
}

/// Provider transport settings shared by every remote seat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        let endpoint = ProviderEndpoint::default();
        Self {
            base_url: endpoint.base_url,
            api_key_env: endpoint.api_key_env,
        }
    }
}

impl FileProviderConfig {
    /// Endpoint for one concrete model on this provider
    pub fn endpoint(&self, model: &str) -> ProviderEndpoint {
        ProviderEndpoint {
            base_url: self.base_url.clone(),
            model: model.to_string(),
            api_key_env: self.api_key_env.clone(),
        }
    }
}

/// One seat on the council panel
///
/// A seat without a model is the data-driven seat backed by the CTR
/// engine instead of an LLM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileSeatConfig {
    pub name: String,
    pub weight: f64,
    pub fallback_score: f64,
    #[serde(default)]
    pub model: Option<String>,
}

/// Council panel composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilePanelConfig {
    pub seats: Vec<FileSeatConfig>,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                FileSeatConfig {
                    name: "gemini".to_string(),
                    weight: 0.40,
                    fallback_score: 70.0,
                    model: Some("gemini-2.0-flash".to_string()),
                },
                FileSeatConfig {
                    name: "claude".to_string(),
                    weight: 0.30,
                    fallback_score: 65.0,
                    model: Some("claude-3-opus".to_string()),
                },
                FileSeatConfig {
                    name: "gpt".to_string(),
                    weight: 0.20,
                    fallback_score: 60.0,
                    model: Some("gpt-4-turbo".to_string()),
                },
                FileSeatConfig {
                    name: "deep-ctr".to_string(),
                    weight: 0.10,
                    fallback_score: 50.0,
                    model: None,
                },
            ],
        }
    }
}

/// Script director settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileDirectorConfig {
    /// Model used for drafting and revising scripts
    pub model: String,
}

impl Default for FileDirectorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
        }
    }
}

/// Scoring engine roster settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileEnginesConfig {
    pub ctr_weight: f64,
    pub hook_weight: f64,
    pub conversion_weight: f64,
    /// Whether the remote zero-shot engine joins the ensemble
    pub remote_enabled: bool,
    pub remote_weight: f64,
    pub remote_model: String,
}

impl Default for FileEnginesConfig {
    fn default() -> Self {
        Self {
            ctr_weight: 3.0,
            hook_weight: 1.5,
            conversion_weight: 1.2,
            remote_enabled: true,
            remote_weight: 1.4,
            remote_model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// Vertical the knowledge base and critic prompts are tuned for
    pub niche: String,
    /// Ensemble aggregator settings
    pub ensemble: EnsembleConfig,
    /// Council evaluator settings
    pub council: CouncilConfig,
    /// Reflexion orchestrator settings
    pub reflexion: ReflexionConfig,
    /// Provider transport settings
    pub provider: FileProviderConfig,
    /// Council panel composition
    pub panel: FilePanelConfig,
    /// Script director settings
    pub director: FileDirectorConfig,
    /// Scoring engine roster
    pub engines: FileEnginesConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            niche: "fitness".to_string(),
            ensemble: EnsembleConfig::default(),
            council: CouncilConfig::default(),
            reflexion: ReflexionConfig::default(),
            provider: FileProviderConfig::default(),
            panel: FilePanelConfig::default(),
            director: FileDirectorConfig::default(),
            engines: FileEnginesConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.ensemble.call_timeout_secs == 0 || self.council.call_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        for seat in &self.panel.seats {
            if seat.name.trim().is_empty() {
                return Err(ConfigValidationError::EmptySeatName);
            }
        }

        let weight_sum: f64 = self.panel.seats.iter().map(|s| s.weight).sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(ConfigValidationError::SeatWeightsNotNormalized(weight_sum));
        }

        // A negative engine weight would let the ensemble's weighted
        // average escape the 0-100 score bounds.
        for weight in [
            self.engines.ctr_weight,
            self.engines.hook_weight,
            self.engines.conversion_weight,
            self.engines.remote_weight,
        ] {
            if !(weight > 0.0 && weight.is_finite()) {
                return Err(ConfigValidationError::NonPositiveEngineWeight(weight));
            }
        }

        if self.ensemble.roas_curve.validate().is_err() {
            return Err(ConfigValidationError::InvalidRoasCurve);
        }

        Ok(())
    }
}
