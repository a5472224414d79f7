//! Council critic adapters

pub mod ctr_critic;
pub mod llm_critic;

pub use ctr_critic::CtrCritic;
pub use llm_critic::LlmCritic;

use crate::config::FileConfig;
use crate::engines::CtrModel;
use crate::providers::ChatClient;
use oracle_application::ports::CriticProvider;
use std::sync::Arc;

/// Build the council panel from configuration.
///
/// Seats with a model become remote LLM judges; the modelless seat is
/// backed by the shared CTR engine. The returned panel preserves seat
/// order, and the evaluator validates that its weights sum to 1.0.
pub fn default_panel(config: &FileConfig, ctr: Arc<CtrModel>) -> Vec<Arc<dyn CriticProvider>> {
    let timeout = config.council.call_timeout();
    config
        .panel
        .seats
        .iter()
        .map(|seat| match &seat.model {
            Some(model) => Arc::new(LlmCritic::new(
                &seat.name,
                seat.weight,
                seat.fallback_score,
                &config.niche,
                ChatClient::new(config.provider.endpoint(model), timeout),
            )) as Arc<dyn CriticProvider>,
            None => {
                Arc::new(CtrCritic::new(seat.weight, seat.fallback_score, Arc::clone(&ctr))) as _
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_has_four_seats_in_order() {
        let config = FileConfig::default();
        let panel = default_panel(&config, Arc::new(CtrModel::default()));

        let names: Vec<&str> = panel.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["gemini", "claude", "gpt", "deep-ctr"]);

        let weight_sum: f64 = panel.iter().map(|c| c.weight()).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
        assert_eq!(panel[0].fallback_score(), 70.0);
        assert_eq!(panel[3].fallback_score(), 50.0);
    }
}
