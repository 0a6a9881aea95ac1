//! tedrag API - HTTP front end
//!
//! Exposes the RAG pipeline at `POST /prompt` and the static retrieval
//! configuration at `GET /stats`, plus a liveness probe and the OpenAPI
//! document.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::{routing::get, Json, Router};
use state::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

/// OpenAPI document for the public surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::prompt::prompt_handler,
        handlers::stats::stats_handler,
        handlers::health::health_check,
    ),
    components(schemas(
        handlers::prompt::PromptRequest,
        handlers::stats::StatsResponse,
        handlers::health::HealthResponse,
        error::ErrorBody,
    )),
    tags(
        (name = "rag", description = "Grounded question answering"),
        (name = "config", description = "Static retrieval configuration"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Assemble the application router.
///
/// CORS is wide open; the stats contract requires a wildcard allow-origin
/// header.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::api_routes())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
