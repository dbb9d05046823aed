//! Error types for the mailer.

use std::fmt;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur while composing or sending an e-mail.
#[derive(Debug)]
pub enum NotificationError {
    /// A required argument was missing or blank
    InvalidInput,
    /// Template registration or rendering failed
    TemplateError(String),
    /// Provider error (transport, remote API, ...)
    ProviderError(String),
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Invalid input"),
            Self::TemplateError(msg) => write!(f, "Template error: {}", msg),
            Self::ProviderError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for NotificationError {}

impl From<handlebars::RenderError> for NotificationError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::TemplateError(err.to_string())
    }
}

impl From<handlebars::TemplateError> for NotificationError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::TemplateError(err.to_string())
    }
}

impl From<eyre::Report> for NotificationError {
    fn from(err: eyre::Report) -> Self {
        Self::ProviderError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(NotificationError::InvalidInput.to_string(), "Invalid input");
    }

    #[test]
    fn test_provider_error_keeps_message() {
        let err: NotificationError = eyre::eyre!("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
    }
}
