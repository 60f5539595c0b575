//! HTTP API module for the goal tracker
//!
//! # Endpoints
//! - `GET /goals` — goal list view (`index.html` from the data path)
//! - `POST /add_goal` — add a goal (form field `goal_name`)
//! - `POST /remove_goal` — remove a goal (form field `goal_id`)
//! - `GET /health` — liveness check
//! - `GET /metrics` — Prometheus metrics
//! - `GET /static/*` — files under the data path, when configured

pub mod handlers;
mod state;
mod view;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use state::AppState;
pub use view::GoalsView;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/goals", get(handlers::list_goals))
        .route("/add_goal", post(handlers::add_goal))
        .route("/remove_goal", post(handlers::remove_goal))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler));

    if let Some(data_path) = &state.config.data_path {
        tracing::debug!("Serving static assets from {}", data_path.display());
        router = router.nest_service("/static", ServeDir::new(data_path));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
