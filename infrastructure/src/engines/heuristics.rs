//! Lightweight heuristic engines
//!
//! Cheap always-available voices that each read one slice of the feature
//! snapshot. They balance the CTR model by reacting to signals it weighs
//! only indirectly.

use async_trait::async_trait;
use oracle_application::ports::ScoringEngine;
use oracle_domain::{EngineOutcome, EnginePrediction, FeatureMap};

/// Scores the opening seconds: hook strength, pattern interrupts, and
/// emotional pull decide whether a viewer stays at all.
pub struct HookSignal {
    weight: f64,
}

impl HookSignal {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for HookSignal {
    fn default() -> Self {
        Self::new(1.5)
    }
}

#[async_trait]
impl ScoringEngine for HookSignal {
    fn name(&self) -> &str {
        "hook-signal"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    async fn predict(&self, features: &FeatureMap) -> EngineOutcome {
        let hook_eff = features.number("hook_effectiveness", 5.0);
        let mut score = hook_eff / 10.0;
        let mut reasons = Vec::new();

        let hook_type = features.text("hook_type");
        if matches!(hook_type, "Visual Shock" | "Pattern Interrupt" | "Question") {
            score += 0.05;
            reasons.push(format!("{hook_type} hook style"));
        }

        if features.number("num_emotional_triggers", 0.0) >= 2.0 {
            score += 0.05;
            reasons.push("Multiple emotional triggers".to_string());
        }

        let reasoning = if reasons.is_empty() {
            format!("Hook effectiveness {hook_eff:.1}/10")
        } else {
            reasons.join("; ")
        };

        EngineOutcome::scored(EnginePrediction::new(score, 0.65, reasoning))
    }
}

/// Scores the close: call-to-action strength, transformation credibility,
/// and production quality drive whether attention turns into conversion.
pub struct ConversionSignal {
    weight: f64,
}

impl ConversionSignal {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for ConversionSignal {
    fn default() -> Self {
        Self::new(1.2)
    }
}

#[async_trait]
impl ScoringEngine for ConversionSignal {
    fn name(&self) -> &str {
        "conversion-signal"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    async fn predict(&self, features: &FeatureMap) -> EngineOutcome {
        let cta = features.number("cta_strength", 5.0);
        let mut score = cta / 10.0;
        let mut reasons = Vec::new();

        if features.flag("has_transformation") {
            let believability = features.number("transformation_believability", 5.0);
            score += 0.05 + (believability - 5.0) * 0.02;
            if believability >= 7.0 {
                reasons.push("Credible transformation proof".to_string());
            }
        }

        if features.number("quality_ratio", 1.0) >= 2.0 {
            score += 0.05;
            reasons.push("High production quality".to_string());
        }

        let reasoning = if reasons.is_empty() {
            format!("CTA strength {cta:.1}/10")
        } else {
            reasons.join("; ")
        };

        EngineOutcome::scored(EnginePrediction::new(score, 0.6, reasoning))
    }
}
