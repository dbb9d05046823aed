use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::messages;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, messages::NOT_FOUND).into_response()
}

/// Response for a handler that panicked, for `CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, messages::UNKNOWN_ERROR).into_response()
}
