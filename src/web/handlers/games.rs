//! Games CRUD HTTP handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppResult;
use crate::models::{Game, GameCreateRequest, GameDeleteRequest, GameFilters, GameUpdateRequest};
use crate::web::{AppState, extractors::AppJson};

use super::parse_date_param;

/// Query parameters for game listing; dates are `YYYY-MM-DD`
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GameListParams {
    pub sport_id: Option<i32>,
    pub team_id: Option<i32>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl GameListParams {
    pub(crate) fn into_filters(self) -> AppResult<GameFilters> {
        Ok(GameFilters {
            sport_id: self.sport_id,
            team_id: self.team_id,
            from: parse_date_param("from", self.from.as_deref())?,
            to: parse_date_param("to", self.to.as_deref())?,
        })
    }
}

/// List games matching the filters, ordered by (date, time) ascending
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    params(GameListParams),
    responses(
        (status = 200, description = "Matching games", body = [Game]),
        (status = 400, description = "Invalid filter", body = crate::web::ErrorBody)
    )
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GameListParams>,
) -> AppResult<Json<Vec<Game>>> {
    let filters = params.into_filters()?;
    let games = state.games.list(&filters).await?;
    Ok(Json(games))
}

/// Get a single game by id
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = "games",
    responses(
        (status = 200, description = "The game", body = Game),
        (status = 404, description = "No such game", body = crate::web::ErrorBody)
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Game>> {
    let game = state.games.find_by_id(id).await?;
    Ok(Json(game))
}

/// Create a game; the stored row starts at row_version 0
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = GameCreateRequest,
    responses(
        (status = 201, description = "Created game", body = Game),
        (status = 400, description = "Invariant violation", body = crate::web::ErrorBody),
        (status = 404, description = "Referenced sport/team/venue missing", body = crate::web::ErrorBody)
    )
)]
pub async fn create_game(
    State(state): State<AppState>,
    AppJson(request): AppJson<GameCreateRequest>,
) -> AppResult<impl IntoResponse> {
    let game = state.games.create(request).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Update a game under the optimistic-concurrency protocol
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = "games",
    request_body = GameUpdateRequest,
    responses(
        (status = 200, description = "Updated game", body = Game),
        (status = 400, description = "Invariant violation", body = crate::web::ErrorBody),
        (status = 404, description = "No such game", body = crate::web::ErrorBody),
        (status = 409, description = "Stale row_version", body = crate::web::ErrorBody)
    )
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<GameUpdateRequest>,
) -> AppResult<Json<Game>> {
    let game = state.games.update(id, request).await?;
    Ok(Json(game))
}

/// Delete a game; the optional body carries a row_version guard
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = "games",
    request_body = GameDeleteRequest,
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed body", body = crate::web::ErrorBody),
        (status = 404, description = "No such game", body = crate::web::ErrorBody),
        (status = 409, description = "Stale row_version", body = crate::web::ErrorBody)
    )
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Option<AppJson<GameDeleteRequest>>,
) -> AppResult<StatusCode> {
    let expected = body.and_then(|AppJson(request)| request.row_version);
    state.games.delete(id, expected).await?;
    Ok(StatusCode::NO_CONTENT)
}
