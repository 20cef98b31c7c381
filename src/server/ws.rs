//! WebSocket handler for real-time updates.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;

use crate::server::state::AppState;
use crate::ticker::robot_data_frame;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handles an individual WebSocket connection.
///
/// The connection subscribes to the broadcast channel; membership in the
/// subscriber set is exactly the lifetime of that receiver. A send failure
/// or channel lag ends only this connection, never the ticker or any other
/// subscriber.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    tracing::debug!("WebSocket client connected");

    // Subscribe before the handshake frame so no tick between the two is missed.
    let mut rx = state.subscribe();

    // Send the current fleet state on connection.
    let initial = robot_data_frame(&state.fleet.snapshot());
    if sender.send(Message::Text(initial)).await.is_err() {
        return;
    }

    // Forward broadcast frames to this socket until it drops.
    let send_task = tokio::spawn(async move {
        while let Ok(frame) = rx.recv().await {
            if sender.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    });

    // Clients send nothing meaningful; watch only for Close.
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    tracing::debug!("WebSocket connection closed");
}
