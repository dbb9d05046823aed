use core_config::{ConfigError, FromEnv, env_required};
use std::sync::Arc;

/// API key accepted by [`require_api_key`](super::require_api_key).
///
/// Loaded from `API_KEY` (required).
#[derive(Clone)]
pub struct ApiKeyConfig {
    key: Arc<str>,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Arc::from(key.into()),
        }
    }

    /// Whether `candidate` matches the configured key.
    pub fn accepts(&self, candidate: &str) -> bool {
        !self.key.is_empty() && constant_time_eq(candidate.as_bytes(), self.key.as_bytes())
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required("API_KEY")?;

        if key.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self::new(key))
    }
}
