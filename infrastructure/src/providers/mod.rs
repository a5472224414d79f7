//! Remote provider transport

pub mod openai_compat;

pub use openai_compat::{ChatClient, ProviderEndpoint, TransportError};
