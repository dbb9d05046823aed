//! Recording provider for tests

use super::{EmailProvider, SendResult};
use crate::models::Email;
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Captures every message instead of sending it. Clones share the same outbox,
/// so a test can keep one handle and give another to the code under test.
#[derive(Clone, Default)]
pub struct MockSmtpProvider {
    outbox: Arc<Mutex<Vec<Email>>>,
    failure_message: Option<String>,
}

impl MockSmtpProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider whose sends always fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outbox: Arc::default(),
            failure_message: Some(message.into()),
        }
    }

    /// Get all sent emails
    pub async fn sent_emails(&self) -> Vec<Email> {
        self.outbox.lock().await.clone()
    }

    /// Check if an email was sent to a specific address
    pub async fn was_sent_to(&self, address: &str) -> bool {
        self.outbox.lock().await.iter().any(|e| e.to == address)
    }
}

#[async_trait]
impl EmailProvider for MockSmtpProvider {
    async fn send(&self, email: &Email) -> Result<SendResult> {
        if let Some(message) = &self.failure_message {
            return Err(eyre::eyre!(message.clone()));
        }

        self.outbox.lock().await.push(email.clone());

        Ok(SendResult {
            message_id: format!("mock-{}", email.id),
        })
    }

    async fn health_check(&self) -> Result<()> {
        match &self.failure_message {
            Some(_) => Err(eyre::eyre!("Mock health check failed")),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_outbox() {
        let provider = MockSmtpProvider::new();
        let handle = provider.clone();

        provider
            .send(&Email::new("user@example.com", "Body"))
            .await
            .unwrap();

        assert!(handle.was_sent_to("user@example.com").await);
        assert!(!handle.was_sent_to("other@example.com").await);
        assert_eq!(handle.sent_emails().await[0].body, "Body");
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let provider = MockSmtpProvider::failing("Simulated failure");

        let err = provider
            .send(&Email::new("test@example.com", "Body"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Simulated failure"));
        assert!(provider.sent_emails().await.is_empty());
        assert!(provider.health_check().await.is_err());
    }
}
