//! OpenAPI documentation generation using utoipa
//!
//! Handler functions are annotated with `#[utoipa::path]`; this module
//! collects them into a single specification served as JSON.

use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

use crate::web::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scorebook API",
        description = "Game scheduling, results and reporting for an intramural sports league",
        license(name = "MIT")
    ),
    paths(
        handlers::games::list_games,
        handlers::games::get_game,
        handlers::games::create_game,
        handlers::games::update_game,
        handlers::games::delete_game,
        handlers::reports::games_report,
        handlers::reference::list_sports,
        handlers::reference::list_teams,
        handlers::reference::list_venues,
        handlers::health::health_check,
    ),
    tags(
        (name = "games", description = "Game scheduling and results"),
        (name = "reports", description = "Filtered reporting over games"),
        (name = "reference", description = "Read-only sports, teams and venues"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI specification as JSON
pub async fn serve_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
