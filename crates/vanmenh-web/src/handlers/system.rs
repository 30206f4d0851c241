//! Liveness probe.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

/// GET /api/health
pub async fn health(State(_state): State<SharedState>) -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
