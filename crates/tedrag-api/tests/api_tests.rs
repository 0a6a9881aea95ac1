//! API Integration Tests
//!
//! Note: tests marked with #[ignore] require live embedding, vector-index,
//! and chat credentials in the environment. To run them:
//! cargo test -- --ignored

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tedrag_api::{create_router, state::AppState};
use tower::ServiceExt;

/// Router backed by empty credentials: request parsing, stats, and health
/// are all exercisable without any environment.
fn test_app() -> axum::Router {
    create_router(Arc::new(AppState::default()))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Stats Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_stats_contract() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({ "chunk_size": 1024, "overlap_ratio": 0.2, "top_k": 10 })
    );
}

#[tokio::test]
async fn test_stats_allows_any_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/stats")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

// =============================================================================
// Prompt Endpoint Tests - request validation
// =============================================================================

#[tokio::test]
async fn test_prompt_rejects_malformed_json() {
    let response = test_app()
        .oneshot(json_request("POST", "/prompt", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid JSON" }));
}

#[tokio::test]
async fn test_prompt_rejects_empty_body() {
    let response = test_app()
        .oneshot(json_request("POST", "/prompt", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid JSON" }));
}

#[tokio::test]
async fn test_prompt_rejects_absent_question() {
    let response = test_app()
        .oneshot(json_request("POST", "/prompt", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing 'question' field" })
    );
}

#[tokio::test]
async fn test_prompt_rejects_empty_question() {
    let response = test_app()
        .oneshot(json_request("POST", "/prompt", r#"{"question": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing 'question' field" })
    );
}

#[tokio::test]
async fn test_prompt_rejects_whitespace_question() {
    let response = test_app()
        .oneshot(json_request("POST", "/prompt", r#"{"question": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing 'question' field" })
    );
}

#[tokio::test]
async fn test_prompt_rejects_non_string_question() {
    let response = test_app()
        .oneshot(json_request("POST", "/prompt", r#"{"question": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing 'question' field" })
    );
}

// =============================================================================
// Prompt Endpoint Tests - configuration
// =============================================================================

#[tokio::test]
async fn test_prompt_without_credentials_is_config_error() {
    // A valid question against empty credentials fails before any upstream
    // call is attempted.
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/prompt",
            r#"{"question": "What is courage?"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing LLMOD_API_KEY or LLMOD_BASE_URL environment variables." })
    );
}

// =============================================================================
// Health and Docs Tests
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_openapi_spec_available() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["openapi"].is_string());
    assert!(json["paths"]["/prompt"].is_object());
    assert!(json["paths"]["/stats"].is_object());
}

// =============================================================================
// Live Pipeline Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires live embedding, vector-index, and chat credentials"]
async fn test_prompt_end_to_end() {
    let app = create_router(Arc::new(AppState::from_env()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/prompt",
            r#"{"question": "What is courage?"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["response"].is_string());
    assert!(json["context"].is_array());
    assert!(json["context"].as_array().unwrap().len() <= 10);
    assert!(json["Augmented_prompt"]["User"]
        .as_str()
        .unwrap()
        .contains("What is courage?"));
}
