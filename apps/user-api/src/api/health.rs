//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings MongoDB and the mail provider
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![
        (
            "mongodb",
            Box::pin(async {
                let status = check_health_detailed(&state.mongo_client).await;
                tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");
                if status.healthy {
                    Ok(())
                } else {
                    Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
                }
            }),
        ),
        (
            "mailer",
            Box::pin(async { state.mailer.health_check().await.map_err(|e| e.to_string()) }),
        ),
    ];

    run_health_checks(checks).await
}
