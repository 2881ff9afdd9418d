//! Reference data HTTP handlers
//!
//! Sports, teams and venues are read-only lookups backing the game form and
//! the repository's foreign-key validation.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppResult;
use crate::models::{Sport, Team, Venue};
use crate::web::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TeamListParams {
    pub sport_id: Option<i32>,
}

/// List all sports
#[utoipa::path(
    get,
    path = "/api/sports",
    tag = "reference",
    responses((status = 200, description = "All sports, by name", body = [Sport]))
)]
pub async fn list_sports(State(state): State<AppState>) -> AppResult<Json<Vec<Sport>>> {
    let sports = state.reference.list_sports().await?;
    Ok(Json(sports))
}

/// List teams, optionally restricted to one sport
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = "reference",
    params(TeamListParams),
    responses((status = 200, description = "Teams, by name", body = [Team]))
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamListParams>,
) -> AppResult<Json<Vec<Team>>> {
    let teams = state.reference.list_teams(params.sport_id).await?;
    Ok(Json(teams))
}

/// List all venues
#[utoipa::path(
    get,
    path = "/api/venues",
    tag = "reference",
    responses((status = 200, description = "All venues, by name", body = [Venue]))
)]
pub async fn list_venues(State(state): State<AppState>) -> AppResult<Json<Vec<Venue>>> {
    let venues = state.reference.list_venues().await?;
    Ok(Json(venues))
}
