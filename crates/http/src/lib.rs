//! HTTP API server for viewer-count.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod request_log;
mod response_types;

use axum::{Json, Router, extract::State, http::StatusCode, middleware, routing::get};
use std::sync::Arc;

use viewer_count_service::CountService;

pub use response_types::ReadinessResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds the only cross-request resource: the count service and, through
/// it, the store's connection pool.
pub struct AppState {
    pub count_service: Arc<CountService>,
}

impl AppState {
    #[must_use]
    pub fn new(count_service: Arc<CountService>) -> Self {
        Self { count_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/count", get(handlers::count::get_count))
        .route("/health", get(health))
        .route("/readiness", get(readiness))
        .layer(middleware::from_fn(request_log::log_request))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    match state.count_service.ping().await {
        Ok(()) => (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse { status: "unavailable", message: Some(e.to_string()) }),
            )
        },
    }
}
