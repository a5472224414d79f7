//! Aggregate prediction types
//!
//! The [`EnsemblePrediction`] is the single calibrated result the aggregator
//! emits for one feature snapshot. It is created fresh per request and
//! immutable once returned.

use super::engine::EngineReport;
use super::roas::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// Score used when no engine evidence is available
pub const DEFAULT_FINAL_SCORE: f64 = 50.0;

/// ROAS point estimate with its confidence interval
///
/// Invariant: `confidence_lower <= predicted_roas <= confidence_upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoasPrediction {
    pub predicted_roas: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    pub confidence_level: ConfidenceLevel,
}

impl RoasPrediction {
    /// Build an interval around a point estimate from a relative width.
    ///
    /// `lower/upper = roas * (1 -/+ uncertainty)`, rounded to cents.
    pub fn around(predicted_roas: f64, uncertainty: f64, level: ConfidenceLevel) -> Self {
        Self {
            predicted_roas: round2(predicted_roas),
            confidence_lower: round2(predicted_roas * (1.0 - uncertainty)),
            confidence_upper: round2(predicted_roas * (1.0 + uncertainty)),
            confidence_level: level,
        }
    }
}

/// Explainability sub-scores, each on a 0-10 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub hook: f64,
    pub cta: f64,
    pub engagement: f64,
    pub conversion: f64,
}

impl SubScores {
    /// Midpoint sub-scores for degenerate input
    pub fn midpoint() -> Self {
        Self {
            hook: 5.0,
            cta: 5.0,
            engagement: 5.0,
            conversion: 5.0,
        }
    }
}

/// Combined prediction for one creative variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsemblePrediction {
    /// Caller-supplied request identifier
    pub request_id: String,
    /// Final weighted score, 0-100
    pub final_score: f64,
    /// Hook/CTA/engagement/conversion breakdown
    pub sub_scores: SubScores,
    /// ROAS projection with confidence interval
    pub roas_prediction: RoasPrediction,
    /// Per-engine contributions, real and degraded
    pub engine_reports: Vec<EngineReport>,
    /// Overall prediction confidence, 0-1
    pub overall_confidence: f64,
    /// Percentage above/below the historical-average ROAS
    pub compared_to_avg: f64,
    /// Improvement suggestions, at most five, in rule order
    pub recommendations: Vec<String>,
    /// Human-readable explanation of the prediction
    pub reasoning: String,
}

impl EnsemblePrediction {
    /// Number of engines that fell back to their neutral prediction
    pub fn degraded_count(&self) -> usize {
        self.engine_reports
            .iter()
            .filter(|r| r.outcome.is_degraded())
            .count()
    }

    /// Whether any engine degraded during this prediction
    pub fn is_degraded(&self) -> bool {
        self.degraded_count() > 0
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_brackets_point() {
        let roas = RoasPrediction::around(2.4, 0.3, ConfidenceLevel::Medium);
        assert!(roas.confidence_lower <= roas.predicted_roas);
        assert!(roas.predicted_roas <= roas.confidence_upper);
        assert_eq!(roas.confidence_lower, 1.68);
        assert_eq!(roas.confidence_upper, 3.12);
    }

    #[test]
    fn test_midpoint_subscores() {
        let scores = SubScores::midpoint();
        assert_eq!(scores.hook, 5.0);
        assert_eq!(scores.conversion, 5.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.456), 2.46);
        assert_eq!(round2(2.454), 2.45);
    }
}
