use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sitegen_connectors::LlmError;
use tracing::error;

/// API-layer error; serialized as `{"detail": ...}` like the rest of the
/// public API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            // Provider statuses pass through so rate limits and auth
            // failures reach the caller unchanged.
            ApiError::Upstream(LlmError::Provider { status, message }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("OpenRouter error: {message}"),
            ),
            ApiError::Upstream(LlmError::Network(e)) => (
                StatusCode::BAD_GATEWAY,
                format!("Upstream request failed: {e}"),
            ),
            ApiError::Upstream(LlmError::InvalidResponse(message)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Generation failed: {message}"),
            ),
        };

        error!("generation request failed: {detail}");
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
