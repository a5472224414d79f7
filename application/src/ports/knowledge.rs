//! Knowledge context port
//!
//! Supplies domain rules and patterns injected into generation prompts.
//! Consumed by the reflexion orchestrator, owned by an external subsystem.

use async_trait::async_trait;

/// Domain knowledge supplier
#[async_trait]
pub trait KnowledgeContext: Send + Sync {
    /// Render the knowledge block for a niche, suitable for direct
    /// inclusion in a director system prompt. Unknown niches fall back to
    /// a default block rather than failing.
    async fn context_block(&self, niche: &str) -> String;
}
