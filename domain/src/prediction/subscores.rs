//! Deterministic sub-score rules
//!
//! Hook, CTA, engagement, and conversion are scored directly from the
//! feature snapshot by small fixed rules, independent of the engine
//! ensemble. They exist for explainability: the final score says *how
//! good*, the sub-scores say *where*.

use crate::core::features::FeatureMap;
use crate::prediction::ensemble::SubScores;

/// Compute all four sub-scores from one feature snapshot.
///
/// An empty feature map yields the documented midpoint defaults.
pub fn compute(features: &FeatureMap) -> SubScores {
    if features.is_empty() {
        return SubScores::midpoint();
    }

    SubScores {
        hook: hook_score(features),
        cta: cta_score(features),
        engagement: engagement_score(features),
        conversion: conversion_score(features),
    }
}

/// Hook effectiveness, 0-10
fn hook_score(features: &FeatureMap) -> f64 {
    let mut base = features.number("hook_effectiveness", 5.0);

    if features.flag("has_transformation") {
        base = (base + 0.5).min(10.0);
    }
    if features.number("num_emotional_triggers", 0.0) >= 2.0 {
        base = (base + 0.5).min(10.0);
    }

    round1(base.clamp(0.0, 10.0))
}

/// CTA strength, 0-10
fn cta_score(features: &FeatureMap) -> f64 {
    let mut base = features.number("cta_strength", 5.0);

    if features.flag("has_voiceover") {
        base = (base + 0.5).min(10.0);
    }

    round1(base.clamp(0.0, 10.0))
}

/// Predicted engagement, 0-10
fn engagement_score(features: &FeatureMap) -> f64 {
    let mut score = 5.0;

    let energy = features.number("energy_level", 2.0);
    if energy >= 3.0 {
        score += 1.5;
    } else if energy <= 1.0 {
        score -= 1.0;
    }

    if features.number("pacing_speed", 2.0) >= 3.0 {
        score += 1.0;
    }

    let triggers = features.number("num_emotional_triggers", 0.0);
    score += (triggers * 0.5).min(2.0);

    if features.flag("has_music") {
        score += 0.5;
    }

    round1(score.clamp(0.0, 10.0))
}

/// Predicted conversion, 0-10
fn conversion_score(features: &FeatureMap) -> f64 {
    let mut score = 5.0;

    // CTA is the dominant conversion signal
    let cta = features.number("cta_strength", 0.0);
    score += (cta - 5.0) * 0.3;

    // A believable transformation builds trust
    if features.flag("has_transformation") {
        score += 1.5;
        let believability = features.number("transformation_believability", 5.0);
        score += (believability - 5.0) * 0.2;
    }

    if features.number("quality_ratio", 1.0) >= 2.0 {
        score += 1.0;
    }

    round1(score.clamp(0.0, 10.0))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_features_yield_midpoints() {
        let scores = compute(&FeatureMap::new());
        assert_eq!(scores, SubScores::midpoint());
    }

    #[test]
    fn test_hook_score_boosts() {
        let features = FeatureMap::new()
            .with("hook_effectiveness", 8.0)
            .with("has_transformation", true)
            .with("num_emotional_triggers", 3.0);
        let scores = compute(&features);
        assert_eq!(scores.hook, 9.0);
    }

    #[test]
    fn test_hook_score_caps_at_ten() {
        let features = FeatureMap::new()
            .with("hook_effectiveness", 10.0)
            .with("has_transformation", true);
        assert_eq!(compute(&features).hook, 10.0);
    }

    #[test]
    fn test_cta_voiceover_boost() {
        let features = FeatureMap::new()
            .with("cta_strength", 6.0)
            .with("has_voiceover", true);
        assert_eq!(compute(&features).cta, 6.5);
    }

    #[test]
    fn test_engagement_high_energy() {
        let features = FeatureMap::new()
            .with("energy_level", 3.0)
            .with("pacing_speed", 3.0)
            .with("num_emotional_triggers", 4.0)
            .with("has_music", true);
        // 5 + 1.5 + 1 + 2 (capped) + 0.5
        assert_eq!(compute(&features).engagement, 10.0);
    }

    #[test]
    fn test_engagement_low_energy_penalty() {
        let features = FeatureMap::new().with("energy_level", 1.0);
        assert_eq!(compute(&features).engagement, 4.0);
    }

    #[test]
    fn test_conversion_weak_cta_drags() {
        let features = FeatureMap::new().with("cta_strength", 0.0);
        assert_eq!(compute(&features).conversion, 3.5);
    }

    #[test]
    fn test_conversion_transformation_lift() {
        let features = FeatureMap::new()
            .with("cta_strength", 7.0)
            .with("has_transformation", true)
            .with("transformation_believability", 8.0)
            .with("quality_ratio", 2.0);
        // 5 + 0.6 + 1.5 + 0.6 + 1
        assert_eq!(compute(&features).conversion, 8.7);
    }

    #[test]
    fn test_all_subscores_in_range() {
        let features = FeatureMap::new()
            .with("hook_effectiveness", 50.0)
            .with("cta_strength", -20.0)
            .with("energy_level", 9.0)
            .with("num_emotional_triggers", 100.0);
        let scores = compute(&features);
        for s in [scores.hook, scores.cta, scores.engagement, scores.conversion] {
            assert!((0.0..=10.0).contains(&s));
        }
    }
}
