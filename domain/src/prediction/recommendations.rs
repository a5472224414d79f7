//! Improvement recommendations
//!
//! Threshold rules over the sub-scores and feature flags. Evaluation order
//! is the reporting order; the list is capped at five entries.

use crate::core::features::FeatureMap;
use crate::prediction::ensemble::SubScores;

/// Maximum number of recommendations reported per prediction
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Generate improvement suggestions from sub-scores and feature flags.
pub fn generate(sub_scores: &SubScores, features: &FeatureMap) -> Vec<String> {
    let mut recommendations = Vec::new();

    if sub_scores.hook < 7.0 {
        recommendations.push(
            "Consider a stronger hook in the first 3 seconds - try a pattern interrupt or shocking statistic"
                .to_string(),
        );
    }

    if sub_scores.cta < 6.0 {
        recommendations.push(
            "Strengthen the call-to-action - be more specific about the desired action".to_string(),
        );
    }

    if sub_scores.engagement < 6.0 {
        recommendations.push(
            "Increase pacing and add more emotional triggers to boost engagement".to_string(),
        );
    }

    if !features.flag("has_transformation") {
        recommendations.push(
            "Consider adding a before/after transformation for higher conversion potential"
                .to_string(),
        );
    }

    if !features.flag("has_voiceover") {
        recommendations.push("Adding voiceover could increase trust and engagement".to_string());
    }

    if features.number("num_winning_patterns_matched", 0.0) == 0.0 {
        recommendations.push(
            "Study top-performing historical campaigns and incorporate their winning elements"
                .to_string(),
        );
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_features() -> FeatureMap {
        FeatureMap::new()
            .with("has_transformation", true)
            .with("has_voiceover", true)
            .with("num_winning_patterns_matched", 3.0)
    }

    fn strong_subscores() -> SubScores {
        SubScores {
            hook: 9.0,
            cta: 8.0,
            engagement: 8.5,
            conversion: 8.0,
        }
    }

    #[test]
    fn test_strong_creative_gets_no_recommendations() {
        let recs = generate(&strong_subscores(), &strong_features());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_weak_hook_triggers_first_rule() {
        let mut scores = strong_subscores();
        scores.hook = 4.0;
        let recs = generate(&scores, &strong_features());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("hook"));
    }

    #[test]
    fn test_capped_at_five() {
        let scores = SubScores {
            hook: 1.0,
            cta: 1.0,
            engagement: 1.0,
            conversion: 1.0,
        };
        // Empty features trip every flag rule too: six rules fire, five kept
        let recs = generate(&scores, &FeatureMap::new());
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_rule_order_is_stable() {
        let scores = SubScores {
            hook: 1.0,
            cta: 9.0,
            engagement: 9.0,
            conversion: 9.0,
        };
        let features = strong_features();
        let recs = generate(&scores, &features);
        assert!(recs[0].contains("first 3 seconds"));
    }
}
