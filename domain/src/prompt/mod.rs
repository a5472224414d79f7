//! Prompt construction

pub mod template;

pub use template::DirectorPrompt;
