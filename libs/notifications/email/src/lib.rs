//! Transactional e-mail for the user service
//!
//! ## Components
//!
//! - **[`Mailer`]**: validates arguments, renders the fixed welcome and
//!   password-reset bodies and hands them to a provider
//! - **Providers**: `LogProvider` (simulated dispatch, the default) and
//!   `MockSmtpProvider` (records messages, for tests)
//! - **Templates**: Handlebars-based `TemplateEngine` for the message bodies
//!
//! ## Usage
//!
//! ```ignore
//! use email::{LogProvider, Mailer, MailerConfig};
//!
//! let mailer = Mailer::new(LogProvider, MailerConfig::default())?;
//! let confirmation = mailer.send_welcome_email("foo@bar.com", "Foo").await?;
//! assert_eq!(confirmation, email::EMAIL_SENT);
//! ```

pub mod error;
pub mod mailer;
pub mod models;
pub mod provider;
pub mod templates;

// Re-export main types
pub use error::{NotificationError, NotificationResult};
pub use mailer::{Mailer, MailerConfig, EMAIL_SENT};
pub use models::Email;
pub use provider::{EmailProvider, LogProvider, MockSmtpProvider, SendResult};
pub use templates::TemplateEngine;
