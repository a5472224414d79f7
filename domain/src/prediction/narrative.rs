//! Derived reasoning narrative
//!
//! Turns the numeric prediction into a short human-readable explanation:
//! overall band, the standout features, and how much the engines agreed.

use crate::core::features::FeatureMap;
use crate::prediction::engine::EngineReport;
use crate::prediction::ensemble::RoasPrediction;

/// Build the reasoning narrative for one prediction.
pub fn explain(
    final_score: f64,
    roas: &RoasPrediction,
    features: &FeatureMap,
    reports: &[EngineReport],
) -> String {
    let mut parts = Vec::new();

    let assessment = if final_score >= 80.0 {
        "strong potential"
    } else if final_score >= 60.0 {
        "above-average potential"
    } else if final_score >= 40.0 {
        "average potential"
    } else {
        "a risk of underperforming"
    };
    parts.push(format!(
        "This creative shows {} with a predicted ROAS of {}x.",
        assessment, roas.predicted_roas
    ));

    let hook_eff = features.number("hook_effectiveness", 5.0);
    if hook_eff >= 7.0 {
        parts.push(format!(
            "The hook is particularly strong (score: {hook_eff}/10)."
        ));
    } else if hook_eff < 4.0 {
        parts.push(format!("The hook needs improvement (score: {hook_eff}/10)."));
    }

    if features.flag("has_transformation") {
        if features.number("transformation_believability", 5.0) >= 7.0 {
            parts.push("The transformation is compelling and believable.".to_string());
        } else {
            parts.push("The transformation could be made more believable.".to_string());
        }
    }

    let patterns = features.number("num_winning_patterns_matched", 0.0) as u32;
    if patterns >= 2 {
        parts.push(format!(
            "This creative matches {patterns} known winning patterns from historical data."
        ));
    }

    if let Some(agreement) = agreement_note(reports) {
        parts.push(agreement);
    }

    let degraded = reports.iter().filter(|r| r.outcome.is_degraded()).count();
    if degraded > 0 {
        parts.push(format!(
            "{degraded} of {} engines were unavailable and contributed neutral fallbacks, reducing confidence.",
            reports.len()
        ));
    }

    parts.join(" ")
}

/// Describe engine agreement: tight agreement or notable disagreement.
fn agreement_note(reports: &[EngineReport]) -> Option<String> {
    if reports.len() < 2 {
        return None;
    }

    let scores: Vec<f64> = reports
        .iter()
        .map(|r| r.outcome.prediction().score)
        .collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let max_diff = scores
        .iter()
        .map(|s| (s - mean).abs())
        .fold(0.0_f64, f64::max);

    if max_diff < 0.1 {
        Some(format!(
            "All {} prediction engines are in strong agreement.",
            reports.len()
        ))
    } else if max_diff > 0.2 {
        Some("Engines show some disagreement, suggesting uncertainty in the prediction.".to_string())
    } else {
        None
    }
}
