//! Message bodies rendered with Handlebars
//!
//! Bodies are plain text, so HTML escaping is turned off. Strict mode makes a
//! missing variable a render error instead of an empty string.

use crate::error::NotificationResult;
use handlebars::Handlebars;
use serde::Serialize;

/// Name of the welcome template, expects `name`.
pub const WELCOME: &str = "welcome";
/// Name of the password-reset template, expects `reset_link`.
pub const PASSWORD_RESET: &str = "password_reset";

const WELCOME_BODY: &str = "Dear {{name}}, welcome to our family!";
const PASSWORD_RESET_BODY: &str = "Please click {{reset_link}} to reset your password.";

/// Handlebars-based template engine
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new TemplateEngine with the default templates registered
    pub fn new() -> NotificationResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        let mut engine = Self { handlebars };
        engine.register(WELCOME, WELCOME_BODY)?;
        engine.register(PASSWORD_RESET, PASSWORD_RESET_BODY)?;
        Ok(engine)
    }

    /// Register (or replace) a template
    pub fn register(&mut self, name: &str, template: &str) -> NotificationResult<()> {
        self.handlebars.register_template_string(name, template)?;
        Ok(())
    }

    /// Render a template by name
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> NotificationResult<String> {
        Ok(self.handlebars.render(name, data)?)
    }

    /// Check if a template exists
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
