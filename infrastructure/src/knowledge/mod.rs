//! Knowledge supplier adapters

pub mod static_knowledge;

pub use static_knowledge::StaticKnowledge;
