//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tedrag_core::RagError;
use utoipa::ToSchema;

/// JSON error body: every failure surfaces as `{"error": <message>}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type mapped onto the wire contract.
#[derive(Debug)]
pub enum ApiError {
    /// Client-caused: malformed body or missing question
    BadRequest(String),
    /// Missing configuration or upstream failure; message is the raw error text
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RagError> for ApiError {
    fn from(err: RagError) -> Self {
        match err {
            RagError::BadRequest(msg) => ApiError::BadRequest(msg),
            RagError::Config(msg) | RagError::Upstream(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Invalid JSON".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_and_upstream_map_to_500() {
        let config: ApiError = RagError::Config("missing".to_string()).into();
        assert_eq!(config.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream: ApiError = RagError::Upstream("boom".to_string()).into();
        assert_eq!(upstream.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
