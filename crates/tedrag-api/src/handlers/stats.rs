//! Retrieval configuration handler

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Static retrieval configuration: the values the index was built with.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    #[schema(example = 1024)]
    pub chunk_size: usize,

    #[schema(example = 0.2)]
    pub overlap_ratio: f32,

    #[schema(example = 10)]
    pub top_k: usize,
}

/// Report the retrieval configuration.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "config",
    responses(
        (status = 200, description = "Retrieval configuration", body = StatsResponse)
    )
)]
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        chunk_size: state.settings.chunk_size,
        overlap_ratio: state.settings.overlap_ratio,
        top_k: state.settings.top_k,
    })
}
