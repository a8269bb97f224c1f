//! Typed API error for HTTP handlers.
//!
//! Converts validation and service errors into HTTP responses with a JSON
//! body and the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use viewer_count_core::FilterError;
use viewer_count_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed or ambiguous query parameters.
    BadRequest(String),
    /// 404 Not Found: id lookup matched no viewer.
    NotFound(String),
    /// 500 Internal Server Error: store interaction failed. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, transient = is_transient(&err), "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

/// Whether the caller may reasonably retry the failed request.
fn is_transient(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ServiceError>().is_some_and(ServiceError::is_transient)
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        tracing::warn!(error = %err, "rejected count parameters");
        Self::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::Internal(err.into())
        }
    }
}
