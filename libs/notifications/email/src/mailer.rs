//! Welcome and password-reset mail on top of an [`EmailProvider`].

use crate::error::{NotificationError, NotificationResult};
use crate::models::Email;
use crate::provider::EmailProvider;
use crate::templates::{PASSWORD_RESET, TemplateEngine, WELCOME};
use core_config::{ConfigError, FromEnv, env_or_default};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Confirmation returned for every dispatched message.
pub const EMAIL_SENT: &str = "Email Sent!";

const DEFAULT_RESET_LINK: &str = "http://some_link";

#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Link placed in password-reset mails
    pub reset_link: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            reset_link: DEFAULT_RESET_LINK.to_string(),
        }
    }
}

impl FromEnv for MailerConfig {
    /// - PASSWORD_RESET_URL: defaults to `http://some_link`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            reset_link: env_or_default("PASSWORD_RESET_URL", DEFAULT_RESET_LINK),
        })
    }
}

pub struct Mailer<P: EmailProvider> {
    provider: Arc<P>,
    templates: Arc<TemplateEngine>,
    config: MailerConfig,
}

impl<P: EmailProvider> Mailer<P> {
    pub fn new(provider: P, config: MailerConfig) -> NotificationResult<Self> {
        Ok(Self {
            provider: Arc::new(provider),
            templates: Arc::new(TemplateEngine::new()?),
            config,
        })
    }

    /// Sends `Dear {name}, welcome to our family!` to `email`.
    #[instrument(skip(self))]
    pub async fn send_welcome_email(&self, email: &str, name: &str) -> NotificationResult<String> {
        require(&[email, name])?;
        let body = self.templates.render(WELCOME, &json!({ "name": name }))?;
        self.send_email(email, &body).await
    }

    /// Sends the password-reset link to `email`.
    #[instrument(skip(self))]
    pub async fn send_password_reset_email(&self, email: &str) -> NotificationResult<String> {
        require(&[email])?;
        let body = self
            .templates
            .render(PASSWORD_RESET, &json!({ "reset_link": self.config.reset_link }))?;
        self.send_email(email, &body).await
    }

    /// Dispatches `body` to `email` and returns [`EMAIL_SENT`].
    #[instrument(skip(self, body))]
    pub async fn send_email(&self, email: &str, body: &str) -> NotificationResult<String> {
        require(&[email, body])?;

        let message = Email::new(email, body);
        let result = self.provider.send(&message).await?;
        debug!(
            provider = self.provider.name(),
            message_id = %result.message_id,
            "Email dispatched"
        );

        Ok(EMAIL_SENT.to_string())
    }

    pub async fn health_check(&self) -> NotificationResult<()> {
        Ok(self.provider.health_check().await?)
    }
}

impl<P: EmailProvider> Clone for Mailer<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            templates: Arc::clone(&self.templates),
            config: self.config.clone(),
        }
    }
}

fn require(args: &[&str]) -> NotificationResult<()> {
    if args.iter().any(|arg| arg.trim().is_empty()) {
        return Err(NotificationError::InvalidInput);
    }
    Ok(())
}
