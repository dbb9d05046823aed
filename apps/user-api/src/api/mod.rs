//! API routes module
//!
//! This module defines all HTTP API routes for the user API.

pub mod health;
pub mod users;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Body of `GET /`
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub name: &'static str,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: "Foo Fooing Bar",
    })
}

/// Create all API routes
/// Note: These are mounted at the root by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(users::router(state))
        .merge(health::router(state.clone()))
}
