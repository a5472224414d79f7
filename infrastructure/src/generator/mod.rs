//! Draft generator adapters

pub mod llm_director;

pub use llm_director::LlmDirector;
