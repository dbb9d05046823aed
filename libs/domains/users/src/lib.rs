//! Users Domain
//!
//! User management backed by a document store, with mail notifications on
//! sign-up and password reset.
//!
//! # Features
//!
//! - Create, read, update and delete users
//! - Welcome mail after a successful create
//! - Password-reset mail
//! - API key gate on deletion
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Argument checks, validation, orchestration
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼────┐ ┌▼─────────┐
//! │ Repo  │ │ Notifier │  ← MongoDB / in-memory store, mailer
//! └──┬────┘ └──────────┘
//!    │
//! ┌──▼──────────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::ApiKeyConfig;
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//! use email::{LogProvider, Mailer, MailerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryUserRepository::new();
//! let mailer = Mailer::new(LogProvider, MailerConfig::default())?;
//! let service = UserService::new(repository, mailer);
//!
//! let router = handlers::router(service, ApiKeyConfig::new("secret"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod notifier;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, DeleteUser, MessageResponse, RemoveResult, UpdateUser, User};
pub use mongodb::MongoUserRepository;
pub use notifier::Notifier;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
