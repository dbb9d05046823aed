//! Secret-salted hashing.
//!
//! [`SecretHasher`] appends `_<secret>` to a value and returns the lowercase hex
//! digest of the result. The secret comes from a [`SecretSource`] supplied at
//! construction (normally [`SecretConfig`], read from `APP_SECRET`), and the
//! digest defaults to MD5 but can be any [`Digest`].
//!
//! ```rust
//! use hashing::{SecretConfig, SecretHasher};
//!
//! let hasher = SecretHasher::new(SecretConfig::new("fake_secret"));
//! assert_eq!(
//!     hasher.get_hash("foo").as_deref(),
//!     Some("a4061ee9b69bd66884d20b93ee3ef643")
//! );
//! assert_eq!(hasher.get_hash(""), None);
//! ```

use core_config::{ConfigError, FromEnv, env_required};
use std::marker::PhantomData;

pub use md5::{Digest, Md5};

/// Supplies the secret mixed into every hash.
pub trait SecretSource: Send + Sync {
    fn secret(&self) -> &str;
}

/// Secret loaded from configuration.
#[derive(Clone)]
pub struct SecretConfig {
    secret: String,
}

impl SecretConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for SecretConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl FromEnv for SecretConfig {
    /// Requires `APP_SECRET` to be set.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_required("APP_SECRET")?))
    }
}

impl SecretSource for SecretConfig {
    fn secret(&self) -> &str {
        &self.secret
    }
}

/// Hashes `value + "_" + secret` with `D` and hex-encodes the digest.
pub struct SecretHasher<S, D = Md5> {
    source: S,
    _digest: PhantomData<fn() -> D>,
}

impl<S: SecretSource> SecretHasher<S> {
    /// MD5-backed hasher.
    pub fn new(source: S) -> Self {
        Self::with_digest(source)
    }
}

impl<S: SecretSource, D: Digest> SecretHasher<S, D> {
    /// Hasher using an explicit digest, e.g. `SecretHasher::<_, Sha256>::with_digest(..)`.
    pub fn with_digest(source: S) -> Self {
        Self {
            source,
            _digest: PhantomData,
        }
    }

    /// Returns `None` for an empty value, otherwise the salted hex digest.
    pub fn get_hash(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            tracing::debug!("refusing to hash an empty value");
            return None;
        }

        let mut digest = D::new();
        digest.update(value.as_bytes());
        digest.update(b"_");
        digest.update(self.source.secret().as_bytes());
        Some(const_hex::encode(digest.finalize()))
    }

    /// Hashes a loosely typed input. Anything other than a non-empty JSON
    /// string yields `None`.
    pub fn hash_json(&self, value: &serde_json::Value) -> Option<String> {
        value.as_str().and_then(|s| self.get_hash(s))
    }
}
