//! Fleet state module.
//!
//! Provides the in-memory robot fleet store shared between the ticker,
//! the REST API and the WebSocket handshake, plus the startup loader.

pub mod loader;
pub mod store;
pub mod types;

pub use loader::*;
pub use store::*;
pub use types::*;
