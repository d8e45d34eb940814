use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::warn;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health check endpoint. Fails when the database stops answering.
async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    }
}
