use super::ApiKeyConfig;
use crate::errors::{AppError, messages};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Extract the presented key from `Authorization: Bearer <key>` or `X-Api-Key`
fn extract_key_from_request(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .or_else(|| headers.get("x-api-key").and_then(|v| v.to_str().ok()))
        .map(str::trim)
}

/// Rejects the request with 401 unless it presents the configured API key.
/// The wrapped handler is not called for rejected requests.
pub async fn require_api_key(
    State(config): State<ApiKeyConfig>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match extract_key_from_request(&headers) {
        Some(key) if config.accepts(key) => Ok(next.run(request).await),
        Some(_) => {
            tracing::debug!("API key rejected");
            Err(AppError::Unauthorized(messages::UNAUTHORIZED.to_string()))
        }
        None => {
            tracing::debug!("No API key in Authorization or X-Api-Key header");
            Err(AppError::Unauthorized(messages::UNAUTHORIZED.to_string()))
        }
    }
}
