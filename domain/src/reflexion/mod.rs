//! Reflexion loop domain
//!
//! Session state for the bounded generate -> critique -> revise cycle.

pub mod session;

pub use session::{ReflexionSession, ReflexionStatus, ReflexionTurn};
