//! Shared application state for the HTTP server.

use crate::fleet::FleetStore;
use tokio::sync::broadcast;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the in-memory fleet.
    pub fleet: FleetStore,

    /// Broadcast channel for WebSocket updates.
    pub broadcast_tx: broadcast::Sender<String>,
}

impl AppState {
    /// Creates new app state over the given fleet and broadcast sender.
    pub fn new(fleet: FleetStore, broadcast_tx: broadcast::Sender<String>) -> Self {
        Self { fleet, broadcast_tx }
    }

    /// Subscribe to the broadcast channel.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.broadcast_tx.subscribe()
    }
}
