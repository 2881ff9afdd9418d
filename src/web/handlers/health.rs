//! Health check HTTP handler

use axum::{Json, extract::State, response::IntoResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use utoipa::ToSchema;

use crate::web::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
///
/// Reports application health including database connectivity.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service health", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let probe = state
        .database
        .connection()
        .execute(Statement::from_string(
            state.database.backend(),
            "SELECT 1".to_string(),
        ))
        .await;

    let status = if probe.is_ok() { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
    })
}
