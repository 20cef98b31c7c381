//! Fleet query endpoint.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::fleet::RobotRecord;
use crate::server::state::AppState;

/// GET /robots - Current fleet snapshot as a JSON array, in load order.
pub async fn get_robots(State(state): State<Arc<AppState>>) -> Json<Vec<RobotRecord>> {
    Json(state.fleet.snapshot())
}
