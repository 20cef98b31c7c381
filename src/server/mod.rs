//! HTTP server module for API and WebSocket endpoints.
//!
//! Provides a REST API and WebSocket for real-time updates to frontends.

pub mod routes;
pub mod state;
pub mod ws;

use crate::fleet::FleetStore;
use crate::server::routes::{health, robots};
use crate::server::state::AppState;
use crate::server::ws::ws_handler;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};

/// Starts the HTTP server on a background thread.
///
/// Returns a handle to the broadcast sender for pushing updates.
pub fn start_server(fleet: FleetStore, addr: SocketAddr) -> broadcast::Sender<String> {
    let (tx, _) = broadcast::channel::<String>(100);
    let tx_clone = tx.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
        rt.block_on(async {
            run_server(fleet, tx_clone, addr).await;
        });
    });

    tracing::info!(%addr, "HTTP server starting");
    tx
}

/// Runs the axum server.
async fn run_server(fleet: FleetStore, broadcast_tx: broadcast::Sender<String>, addr: SocketAddr) {
    let state = Arc::new(AppState::new(fleet, broadcast_tx));

    let app = router(state);

    tracing::info!("HTTP server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("HTTP server failed");
}

/// Builds the application router.
fn router(state: Arc<AppState>) -> Router {
    // CORS layer for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Fleet API
        .route("/robots", get(robots::get_robots))
        // WebSocket
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}
