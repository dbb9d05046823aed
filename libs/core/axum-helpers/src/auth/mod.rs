//! Shared-key authorization for mutating routes.
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, require_api_key};
//! use core_config::FromEnv;
//!
//! let auth = ApiKeyConfig::from_env()?;
//! let protected = delete(handler)
//!     .route_layer(axum::middleware::from_fn_with_state(auth, require_api_key));
//! ```

pub mod config;
pub mod middleware;

pub use config::ApiKeyConfig;
pub use middleware::require_api_key;
