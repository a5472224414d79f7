//! Predict performance use case (ensemble aggregator)
//!
//! Combines N scoring engine predictions into one calibrated
//! [`EnsemblePrediction`]. All engine calls fan out concurrently with a
//! per-call timeout and join before combination begins; no partial result
//! is ever combined with an in-flight one.
//!
//! The aggregator is total: failures are isolated per engine, and an empty
//! or fully-degraded engine set yields the documented neutral defaults
//! rather than an error, because downstream consumers rank predictions and
//! depend on a total ordering.

use crate::config::EnsembleConfig;
use crate::ports::ScoringEngine;
use oracle_domain::prediction::{narrative, recommendations, subscores};
use oracle_domain::{
    DEFAULT_FINAL_SCORE, DomainError, EngineOutcome, EngineReport, EnsemblePrediction, FeatureMap,
    RoasPrediction,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Overall confidence is clamped into this band
const CONFIDENCE_FLOOR: f64 = 0.40;
const CONFIDENCE_CAP: f64 = 0.95;

/// Feature key holding the opaque historical-pattern match count
const PATTERNS_KEY: &str = "num_winning_patterns_matched";

/// Use case for running the ensemble prediction
pub struct PredictPerformance {
    engines: Vec<Arc<dyn ScoringEngine>>,
    config: EnsembleConfig,
}

impl std::fmt::Debug for PredictPerformance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictPerformance")
            .field(
                "engines",
                &self.engines.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}

impl PredictPerformance {
    /// Create the aggregator with a fixed engine set.
    ///
    /// The registry is explicit: engines are passed in at construction,
    /// never discovered implicitly. Fails when any engine weight is not a
    /// positive real or the ROAS anchors are out of order; a negative
    /// weight would let the weighted average escape the 0-100 score
    /// bounds, so it is rejected here rather than clamped later.
    pub fn new(
        engines: Vec<Arc<dyn ScoringEngine>>,
        config: EnsembleConfig,
    ) -> Result<Self, DomainError> {
        for engine in &engines {
            let weight = engine.weight();
            if !(weight > 0.0 && weight.is_finite()) {
                return Err(DomainError::NonPositiveWeight {
                    name: engine.name().to_string(),
                    weight,
                });
            }
        }
        config.roas_curve.validate()?;

        Ok(Self { engines, config })
    }

    /// Names of the registered engines, in registration order
    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Predict performance for one feature snapshot.
    ///
    /// Infallible: every failure path degrades into the documented
    /// defaults. Idempotent for deterministic engines.
    pub async fn execute(&self, features: &FeatureMap, request_id: &str) -> EnsemblePrediction {
        info!(
            request_id,
            engines = self.engines.len(),
            "Starting ensemble prediction"
        );

        let reports = self.fan_out(features).await;

        for report in reports.iter().filter(|r| r.outcome.is_degraded()) {
            warn!(engine = %report.engine, "Engine degraded to neutral fallback");
        }

        let final_score = combine_scores(&reports);
        let overall_confidence = combine_confidence(&reports);

        let sub_scores = subscores::compute(features);
        let patterns_matched = features.number(PATTERNS_KEY, 0.0).max(0.0) as u32;
        let width = self.config.uncertainty.width(patterns_matched);
        let level = self.config.uncertainty.level(width);
        let predicted_roas = self.config.roas_curve.project(final_score);
        let roas_prediction = RoasPrediction::around(predicted_roas, width, level);

        let compared_to_avg =
            round2((predicted_roas / self.config.roas_curve.baseline - 1.0) * 100.0);
        let recommendations = recommendations::generate(&sub_scores, features);
        let reasoning = narrative::explain(final_score, &roas_prediction, features, &reports);

        debug!(request_id, final_score, "Ensemble prediction complete");

        EnsemblePrediction {
            request_id: request_id.to_string(),
            final_score,
            sub_scores,
            roas_prediction,
            engine_reports: reports,
            overall_confidence,
            compared_to_avg,
            recommendations,
            reasoning,
        }
    }

    /// Call every engine concurrently and join before combining.
    ///
    /// A timeout or panicked task degrades that engine only. Reports come
    /// back in registration order regardless of completion order.
    async fn fan_out(&self, features: &FeatureMap) -> Vec<EngineReport> {
        let mut join_set = JoinSet::new();
        let per_call = self.config.call_timeout();

        for (index, engine) in self.engines.iter().enumerate() {
            let engine = Arc::clone(engine);
            let features = features.clone();

            join_set.spawn(async move {
                let outcome = match timeout(per_call, engine.predict(&features)).await {
                    Ok(outcome) => outcome,
                    Err(_) => EngineOutcome::degraded(format!(
                        "timed out after {}s",
                        per_call.as_secs()
                    )),
                };
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<EngineOutcome>> = vec![None; self.engines.len()];
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => warn!("Engine task join error: {e}"),
            }
        }

        self.engines
            .iter()
            .zip(slots)
            .map(|(engine, slot)| {
                let outcome =
                    slot.unwrap_or_else(|| EngineOutcome::degraded("engine task aborted"));
                EngineReport::new(engine.name(), engine.weight(), outcome)
            })
            .collect()
    }
}

/// Weighted score combination.
///
/// Effective weight = configured weight x engine confidence. Zero total
/// effective weight (no engines, or all fully unconfident) yields the
/// fixed neutral default of 50.
fn combine_scores(reports: &[EngineReport]) -> f64 {
    let total_weight: f64 = reports.iter().map(EngineReport::effective_weight).sum();
    if total_weight <= 0.0 {
        return DEFAULT_FINAL_SCORE;
    }

    let weighted_sum: f64 = reports
        .iter()
        .map(|r| r.outcome.prediction().score * r.effective_weight())
        .sum();

    round2(100.0 * weighted_sum / total_weight)
}

/// Overall confidence: weight-averaged engine confidence plus an agreement
/// bonus, clamped into [0.40, 0.95].
///
/// The bonus rewards tight agreement: with a maximum absolute deviation d
/// of any engine's score from the mean, the bonus is max(0, 0.10 - 2d).
fn combine_confidence(reports: &[EngineReport]) -> f64 {
    if reports.is_empty() {
        return CONFIDENCE_FLOOR;
    }

    let total_weight: f64 = reports.iter().map(|r| r.weight).sum();
    let weighted_confidence = if total_weight > 0.0 {
        reports
            .iter()
            .map(|r| r.outcome.prediction().confidence * r.weight)
            .sum::<f64>()
            / total_weight
    } else {
        0.5
    };

    let scores: Vec<f64> = reports
        .iter()
        .map(|r| r.outcome.prediction().score)
        .collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let max_deviation = scores
        .iter()
        .map(|s| (s - mean).abs())
        .fold(0.0_f64, f64::max);
    let agreement_bonus = (0.10 - 2.0 * max_deviation).max(0.0);

    round2((weighted_confidence + agreement_bonus).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CAP))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
