//! API route definitions

use crate::handlers::{health, prompt, stats};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Public routes.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prompt", post(prompt::prompt_handler))
        .route("/stats", get(stats::stats_handler))
        .route("/health", get(health::health_check))
}
