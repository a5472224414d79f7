//! Object graph assembly from file configuration
//!
//! Translates the raw [`FileConfig`] into the concrete engine roster,
//! council panel, and director injected into the use cases. The CTR model
//! is built once and shared between the ensemble and its council seat so
//! runtime training is visible to both.

use crate::config::FileConfig;
use crate::critics;
use crate::engines::{ConversionSignal, CtrModel, HookSignal, RemoteModel};
use crate::generator::LlmDirector;
use crate::providers::ChatClient;
use oracle_application::ports::{CriticProvider, DraftGenerator, ScoringEngine};
use std::sync::Arc;
use tracing::info;

/// Build the scoring engine roster for the ensemble
pub fn build_engines(config: &FileConfig, ctr: Arc<CtrModel>) -> Vec<Arc<dyn ScoringEngine>> {
    let mut engines: Vec<Arc<dyn ScoringEngine>> = vec![
        ctr,
        Arc::new(HookSignal::new(config.engines.hook_weight)),
        Arc::new(ConversionSignal::new(config.engines.conversion_weight)),
    ];

    if config.engines.remote_enabled {
        let client = ChatClient::new(
            config.provider.endpoint(&config.engines.remote_model),
            config.ensemble.call_timeout(),
        );
        engines.push(Arc::new(RemoteModel::new(
            "remote-llm",
            config.engines.remote_weight,
            client,
        )));
    }

    info!(engines = engines.len(), "Scoring engine roster assembled");
    engines
}

/// Build the council panel
pub fn build_panel(config: &FileConfig, ctr: Arc<CtrModel>) -> Vec<Arc<dyn CriticProvider>> {
    critics::default_panel(config, ctr)
}

/// Build the script director, if its provider is configured.
///
/// Returns `None` when the API key is absent; the orchestrator reports
/// that as an error outcome instead of failing at startup.
pub fn build_director(config: &FileConfig) -> Option<Arc<dyn DraftGenerator>> {
    let endpoint = config.provider.endpoint(&config.director.model);
    if !endpoint.is_configured() {
        return None;
    }
    let client = ChatClient::new(endpoint, config.council.call_timeout());
    Some(Arc::new(LlmDirector::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_includes_remote_engine() {
        let config = FileConfig::default();
        let engines = build_engines(&config, Arc::new(CtrModel::new(config.engines.ctr_weight)));

        let names: Vec<&str> = engines.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["ctr-model", "hook-signal", "conversion-signal", "remote-llm"]
        );
        assert_eq!(engines[0].weight(), 3.0);
    }

    #[test]
    fn test_remote_engine_can_be_disabled() {
        let mut config = FileConfig::default();
        config.engines.remote_enabled = false;
        let engines = build_engines(&config, Arc::new(CtrModel::default()));
        assert_eq!(engines.len(), 3);
    }

    #[test]
    fn test_director_absent_without_key() {
        let mut config = FileConfig::default();
        config.provider.api_key_env = "WIRING_TEST_UNSET_KEY".to_string();
        assert!(build_director(&config).is_none());
    }
}
