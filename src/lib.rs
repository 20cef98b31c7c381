//! FleetMon - Robot fleet telemetry server.
//!
//! Serves a simulated robot fleet over a REST endpoint and pushes updated
//! telemetry to connected WebSocket clients on a fixed interval.

pub mod config;
pub mod fleet;
pub mod server;
pub mod ticker;
