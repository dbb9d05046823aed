//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: API key check for protected routes
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//! - **[`http`]**: CORS configuration
//! - **[`errors`]**: The JSON error format (`{"error": message}`) and fallbacks
//! - **[`extractors`]**: JSON extractor with matching rejections
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new())?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{ApiKeyConfig, require_api_key};

pub use server::{
    HealthCheckFuture, HealthResponse, OPENAPI_PATH, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer};

pub use errors::{AppError, ErrorResponse};

pub use extractors::JsonBody;
