//! Council critique and verdict types
//!
//! The council scores textual script drafts with a small fixed panel of
//! critics. Unlike the engine ensemble, panel weights are fixed, not
//! confidence-adjusted: the panel is small and hand-curated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One judge's opinion of a script draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilCritique {
    /// Judge label (e.g. "gemini", "deep-ctr")
    pub source: String,
    /// Score on the 0-100 scale, clamped
    pub score: f64,
    /// Free-text critique, used to steer revision
    pub feedback: String,
}

impl CouncilCritique {
    /// Create a critique, clamping the score into [0, 100]
    pub fn new(source: impl Into<String>, score: f64, feedback: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            score: score.clamp(0.0, 100.0),
            feedback: feedback.into(),
        }
    }

    /// The substitute critique for an unreachable judge
    pub fn fallback(source: impl Into<String>, score: f64, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(source, score, format!("unavailable, fallback applied: {reason}"))
    }
}

/// Final decision of a council evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Approve,
    Reject,
}

impl Verdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approve)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Approve => write!(f, "APPROVE"),
            Verdict::Reject => write!(f, "REJECT"),
        }
    }
}

/// Aggregate council result for one script draft
///
/// # Example
///
/// ```
/// use oracle_domain::council::critique::{CouncilCritique, CouncilVerdict};
///
/// let critiques = [
///     (CouncilCritique::new("gemini", 90.0, "Strong hook"), 0.40),
///     (CouncilCritique::new("gpt", 80.0, "Decent pacing"), 0.20),
///     (CouncilCritique::new("claude", 95.0, "Excellent"), 0.30),
///     (CouncilCritique::new("deep-ctr", 70.0, ""), 0.10),
/// ];
/// let verdict = CouncilVerdict::decide(&critiques, 85.0);
/// assert_eq!(verdict.final_score, 87.5);
/// assert!(verdict.verdict.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilVerdict {
    /// Weighted sum of the panel's scores, 0-100
    pub final_score: f64,
    /// Per-judge scores
    pub breakdown: BTreeMap<String, f64>,
    /// APPROVE iff final_score strictly exceeds the threshold
    pub verdict: Verdict,
    /// Aggregated critique feedback, used to steer revision
    pub feedback: String,
}

impl CouncilVerdict {
    /// Combine weighted critiques into a verdict.
    ///
    /// Callers guarantee the weights sum to 1.0; the council evaluator
    /// validates this at construction.
    pub fn decide(critiques: &[(CouncilCritique, f64)], threshold: f64) -> Self {
        let final_score = critiques
            .iter()
            .map(|(c, weight)| c.score * weight)
            .sum::<f64>();
        // Round to one decimal for a stable, presentable score
        let final_score = (final_score * 10.0).round() / 10.0;

        let breakdown = critiques
            .iter()
            .map(|(c, _)| (c.source.clone(), c.score))
            .collect();

        let verdict = if final_score > threshold {
            Verdict::Approve
        } else {
            Verdict::Reject
        };

        let feedback = critiques
            .iter()
            .filter(|(c, _)| !c.feedback.is_empty())
            .map(|(c, _)| format!("{}: {}", c.source, c.feedback))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            final_score,
            breakdown,
            verdict,
            feedback,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.verdict.is_approved()
    }
}
