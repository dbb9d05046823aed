use serde::{Deserialize, Serialize};

/// Plain-text e-mail handed to a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier for the email
    pub id: String,
    /// Recipient email address
    pub to: String,
    /// Plain text body
    pub body: String,
}

impl Email {
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            to: to.into(),
            body: body.into(),
        }
    }
}
