pub mod handlers;
pub mod messages;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body sent for every message-bearing error.
///
/// ```json
/// { "error": "Invalid arguments" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Errors that carry a message are rendered as [`ErrorResponse`]. Validation
/// maps are structured already and are sent back unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.body_text())]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("{0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl AppError {
    fn message(status: StatusCode, message: String) -> Response {
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                Self::message(e.status(), e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {}", e);
                let details = serde_json::to_value(&e).unwrap_or(serde_json::Value::Null);
                (StatusCode::BAD_REQUEST, Json(details)).into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                Self::message(StatusCode::BAD_REQUEST, msg)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                Self::message(StatusCode::UNAUTHORIZED, msg)
            }
        }
    }
}
