//! Core domain primitives
//!
//! Fundamental value objects shared across the prediction, council, and
//! reflexion modules.

pub mod error;
pub mod features;

pub use error::DomainError;
pub use features::{FeatureMap, FeatureValue};
