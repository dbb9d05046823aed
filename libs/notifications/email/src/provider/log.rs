//! Provider that only logs the message. No mail leaves the process.

use super::{EmailProvider, SendResult};
use crate::models::Email;
use async_trait::async_trait;
use eyre::Result;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogProvider;

#[async_trait]
impl EmailProvider for LogProvider {
    async fn send(&self, email: &Email) -> Result<SendResult> {
        info!(id = %email.id, to = %email.to, body = %email.body, "Simulated email dispatch");
        Ok(SendResult {
            message_id: format!("log-{}", email.id),
        })
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
