//! Evaluate script use case (council evaluator)
//!
//! Scores a textual script candidate with a small fixed panel of critic
//! providers plus one data-driven seat. Panel weights are fixed, not
//! confidence-adjusted: the panel is small and hand-curated.
//!
//! All critic calls fan out concurrently; each independently times out or
//! fails into its provider's own calibrated fallback score, so one slow or
//! unavailable judge never blocks or nulls the others.

use crate::config::CouncilConfig;
use crate::ports::{CriticError, CriticProvider};
use oracle_domain::{CouncilCritique, CouncilVerdict, DomainError, FeatureMap};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{info, warn};

/// Tolerance for the panel weight-sum invariant
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Use case for one-shot council evaluation of a script draft
pub struct EvaluateScript {
    critics: Vec<Arc<dyn CriticProvider>>,
    config: CouncilConfig,
}

impl EvaluateScript {
    /// Build the council.
    ///
    /// Fails when the panel is empty or its fixed weights do not sum to
    /// 1.0; the weight invariant is established here once so evaluation
    /// never needs to re-check it.
    pub fn new(
        critics: Vec<Arc<dyn CriticProvider>>,
        config: CouncilConfig,
    ) -> Result<Self, DomainError> {
        if critics.is_empty() {
            return Err(DomainError::EmptyPanel);
        }

        let sum: f64 = critics.iter().map(|c| c.weight()).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DomainError::WeightsNotNormalized { sum });
        }

        Ok(Self { critics, config })
    }

    /// The configured approval threshold
    pub fn approval_threshold(&self) -> f64 {
        self.config.approval_threshold
    }

    /// Evaluate a script draft. Infallible after construction.
    pub async fn execute(
        &self,
        script: &str,
        visual_features: Option<&FeatureMap>,
    ) -> CouncilVerdict {
        info!(judges = self.critics.len(), "Council reviewing draft");

        let critiques = self.fan_out(script, visual_features).await;

        let weighted: Vec<(CouncilCritique, f64)> = self
            .critics
            .iter()
            .zip(critiques)
            .map(|(critic, critique)| (critique, critic.weight()))
            .collect();

        let verdict = CouncilVerdict::decide(&weighted, self.config.approval_threshold);
        info!(score = verdict.final_score, verdict = %verdict.verdict, "Council verdict");
        verdict
    }

    /// Query every judge concurrently; substitute fallbacks at the join
    /// barrier. Critiques come back in panel order.
    async fn fan_out(
        &self,
        script: &str,
        visual_features: Option<&FeatureMap>,
    ) -> Vec<CouncilCritique> {
        let mut join_set = JoinSet::new();
        let per_call = self.config.call_timeout();

        for (index, critic) in self.critics.iter().enumerate() {
            let critic = Arc::clone(critic);
            let script = script.to_string();
            let visual = visual_features.cloned();

            join_set.spawn(async move {
                let result = match timeout(per_call, critic.critique(&script, visual.as_ref())).await
                {
                    Ok(result) => result,
                    Err(_) => Err(CriticError::Timeout),
                };
                (index, result)
            });
        }

        let mut slots: Vec<Option<CouncilCritique>> = vec![None; self.critics.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, Ok(critique))) => slots[index] = Some(critique),
                Ok((index, Err(e))) => {
                    let critic = &self.critics[index];
                    warn!(judge = critic.name(), error = %e, "Critic fell back");
                    slots[index] = Some(CouncilCritique::fallback(
                        critic.name(),
                        critic.fallback_score(),
                        e.to_string(),
                    ));
                }
                Err(e) => warn!("Critic task join error: {e}"),
            }
        }

        self.critics
            .iter()
            .zip(slots)
            .map(|(critic, slot)| {
                slot.unwrap_or_else(|| {
                    CouncilCritique::fallback(
                        critic.name(),
                        critic.fallback_score(),
                        "critic task aborted",
                    )
                })
            })
            .collect()
    }
}
