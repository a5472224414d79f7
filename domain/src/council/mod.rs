//! Council domain
//!
//! Critique and verdict types for the fixed critic panel, plus the pure
//! parsing of free-form critic responses into scores.

pub mod critique;
pub mod parsing;

pub use critique::{CouncilCritique, CouncilVerdict, Verdict};
pub use parsing::{parse_critique_score, parse_rejection_feedback};
