//! Axum router — maps URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{fortune::fortune_submit, system::health};
use crate::state::SharedState;

/// Build and return the full Axum router.
/// Method routing gives 405 on anything but POST for /api/fortune.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/fortune", post(fortune_submit))
        .route("/api/health", get(health))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
