use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::api::AppState;
use crate::metrics::paths;

/// GET /health
///
/// Liveness only: storage is not consulted, so this keeps answering `OK`
/// while the database is unreachable.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.metrics.record_request(paths::HEALTH);
    (StatusCode::OK, "OK")
}
