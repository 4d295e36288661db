//! Shared error response shape and the JSON 404 fallback.
//!
//! Domain crates that carry a bespoke wire contract (fixed status/body
//! pairs) implement `IntoResponse` on their own error types instead of
//! using [`ErrorResponse`]; this module only covers requests that never
//! reach a domain router.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Error response shape used by the shared fallback handler.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Fallback for routes no router claims. Keeps unknown paths on the
/// JSON contract instead of axum's plain-text default.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: "The requested resource was not found".to_string(),
        details: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
