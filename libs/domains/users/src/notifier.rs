//! Outgoing notifications needed by the users service.

use async_trait::async_trait;
use email::{EmailProvider, Mailer};

use crate::error::UserResult;

/// Notification port of the users domain. Each call returns the
/// dispatcher's confirmation text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_welcome_email(&self, email: &str, name: &str) -> UserResult<String>;

    async fn send_password_reset_email(&self, email: &str) -> UserResult<String>;
}

#[async_trait]
impl<P: EmailProvider + 'static> Notifier for Mailer<P> {
    async fn send_welcome_email(&self, email: &str, name: &str) -> UserResult<String> {
        Ok(Mailer::send_welcome_email(self, email, name).await?)
    }

    async fn send_password_reset_email(&self, email: &str) -> UserResult<String> {
        Ok(Mailer::send_password_reset_email(self, email).await?)
    }
}
