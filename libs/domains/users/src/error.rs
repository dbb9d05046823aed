use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

/// Messages for rejected arguments
pub mod messages {
    pub const INVALID_USER_ID: &str = "Invalid user id";
    pub const INVALID_ID: &str = "Invalid id";
    pub const INVALID_ARGUMENTS: &str = "Invalid arguments";
    pub const INVALID_EMAIL: &str = "Invalid email";
    pub const USER_NOT_FOUND: &str = "User not found";
}

/// Every variant except `Validation` displays its message verbatim, since that
/// message is what ends up in the `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Notification(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for the shared error format
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(errors) => AppError::ValidationError(errors),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl From<email::NotificationError> for UserError {
    fn from(err: email::NotificationError) -> Self {
        UserError::Notification(err.to_string())
    }
}
