//! Users API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{MongoUserRepository, UserService, handlers};

use crate::state::AppState;

/// Create users router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoUserRepository::new(state.db.clone());

    // Create the service; the mailer doubles as the notifier
    let service = UserService::new(repository, state.mailer.clone());

    // Return the domain's router; DELETE is guarded by the API key
    handlers::router(service, state.config.auth.clone())
}
