//! Infrastructure layer for ad-oracle
//!
//! Concrete adapters behind the application ports: scoring engines,
//! council critics, the script director, the knowledge base, provider
//! transport, and configuration loading.

pub mod config;
pub mod critics;
pub mod engines;
pub mod generator;
pub mod knowledge;
pub mod providers;
pub mod wiring;

pub use config::{ConfigLoader, FileConfig};
pub use critics::{CtrCritic, LlmCritic, default_panel};
pub use engines::{ConversionSignal, CtrModel, HookSignal, RemoteModel};
pub use generator::LlmDirector;
pub use knowledge::StaticKnowledge;
pub use providers::{ChatClient, ProviderEndpoint, TransportError};
