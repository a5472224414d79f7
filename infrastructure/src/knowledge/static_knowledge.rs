//! Niche knowledge base
//!
//! Aggregates hardcoded strategy rules with runtime injections: live user
//! research and hooks scraped from competitor ads. The context block it
//! renders is prepended to the director's drafting prompt.

use async_trait::async_trait;
use chrono::Local;
use oracle_application::ports::KnowledgeContext;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Hardcoded strategy for one vertical
#[derive(Debug, Clone)]
struct NicheStrategy {
    rules: Vec<&'static str>,
    psychology: Vec<&'static str>,
    pain_points: Vec<&'static str>,
}

fn builtin_domains() -> HashMap<String, NicheStrategy> {
    let mut domains = HashMap::new();
    domains.insert(
        "fitness".to_string(),
        NicheStrategy {
            rules: vec![
                "0-3s: Pattern Interrupt (Visual Shock)",
                "3-10s: Agitate the Pain",
                "10-40s: The New Mechanism",
                "40-60s: Explicit CTA",
            ],
            psychology: vec![
                "Status (Look good)",
                "Sloth (Easy/Fast results)",
                "Fear (Missing out/Health decline)",
            ],
            pain_points: vec![
                "Hating how clothes fit (Visceral)",
                "Low energy with kids (Guilt)",
                "Plateauing despite eating clean (Frustration)",
            ],
        },
    );
    domains
}

/// In-memory knowledge supplier with runtime research injection
///
/// Unknown niches fall back to the fitness playbook rather than an empty
/// block, so the director always drafts against some strategy.
pub struct StaticKnowledge {
    domains: HashMap<String, NicheStrategy>,
    research: RwLock<HashMap<String, Vec<String>>>,
    competitor_hooks: RwLock<Vec<String>>,
}

impl StaticKnowledge {
    pub fn new() -> Self {
        Self {
            domains: builtin_domains(),
            research: RwLock::new(HashMap::new()),
            competitor_hooks: RwLock::new(Vec::new()),
        }
    }

    /// Record a live research insight for a niche, timestamped
    pub async fn add_research(&self, niche: &str, insight: &str) {
        let timestamp = Local::now().format("%H:%M");
        let mut research = self.research.write().await;
        research
            .entry(niche.to_string())
            .or_default()
            .push(format!("[{timestamp}] USER INTEL: {insight}"));
    }

    /// Replace the set of competitor hooks
    pub async fn inject_competitor_hooks(&self, hooks: Vec<String>) {
        *self.competitor_hooks.write().await = hooks;
    }
}

impl Default for StaticKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeContext for StaticKnowledge {
    async fn context_block(&self, niche: &str) -> String {
        let strategy = self
            .domains
            .get(niche)
            .or_else(|| self.domains.get("fitness"))
            .cloned()
            .unwrap_or(NicheStrategy {
                rules: vec![],
                psychology: vec![],
                pain_points: vec![],
            });

        let hooks = self.competitor_hooks.read().await;
        let hooks_block = if hooks.is_empty() {
            "No competitor data yet. Rely on rules.".to_string()
        } else {
            hooks.join("\n")
        };

        let research = self.research.read().await;
        let research_block = match research.get(niche) {
            Some(entries) if !entries.is_empty() => entries.join("\n"),
            _ => "No live research yet. Follow general rules.".to_string(),
        };

        format!(
            "=== STRATEGY ===\nRULES: {}\nPSYCHOLOGY: {}\nPAINS: {}\n\n\
             === COMPETITOR WINNING HOOKS ===\n{}\n\n\
             === LIVE USER RESEARCH (PRIORITY) ===\n{}",
            strategy.rules.join("; "),
            strategy.psychology.join("; "),
            strategy.pain_points.join(", "),
            hooks_block,
            research_block,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_context_block_carries_strategy_sections() {
        let knowledge = StaticKnowledge::new();
        let block = knowledge.context_block("fitness").await;

        assert!(block.contains("Pattern Interrupt"));
        assert!(block.contains("PSYCHOLOGY:"));
        assert!(block.contains("No competitor data yet"));
        assert!(block.contains("No live research yet"));
    }

    #[tokio::test]
    async fn test_unknown_niche_falls_back_to_fitness() {
        let knowledge = StaticKnowledge::new();
        let block = knowledge.context_block("skincare").await;
        assert!(block.contains("Pattern Interrupt"));
    }

    #[tokio::test]
    async fn test_research_injection_appears_in_block() {
        let knowledge = StaticKnowledge::new();
        knowledge
            .add_research("fitness", "Audience hates gym-bro tone")
            .await;

        let block = knowledge.context_block("fitness").await;
        assert!(block.contains("USER INTEL: Audience hates gym-bro tone"));
        assert!(!block.contains("No live research yet"));
    }

    #[tokio::test]
    async fn test_research_is_scoped_per_niche() {
        let knowledge = StaticKnowledge::new();
        knowledge.add_research("skincare", "Retinol fatigue").await;

        let block = knowledge.context_block("fitness").await;
        assert!(block.contains("No live research yet"));
    }

    #[tokio::test]
    async fn test_competitor_hooks_replace_placeholder() {
        let knowledge = StaticKnowledge::new();
        knowledge
            .inject_competitor_hooks(vec!["POV: your gym kit judges you".to_string()])
            .await;

        let block = knowledge.context_block("fitness").await;
        assert!(block.contains("POV: your gym kit judges you"));
    }
}
