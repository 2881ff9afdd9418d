//! SeaORM Game repository implementation
//!
//! Owns every mutation and point-lookup of game rows. All writes run inside
//! a single transaction, and update/delete follow the optimistic-concurrency
//! protocol: read the row, compare `row_version` against what the client
//! observed, then apply a version-guarded write. First committer wins; the
//! loser gets a conflict and retry is the caller's responsibility.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

use crate::entities::{games, prelude::*};
use crate::errors::{AppError, AppResult};
use crate::models::{Game, GameCreateRequest, GameFilters, GameStatus, GameUpdateRequest};

/// SeaORM-based Game repository
#[derive(Clone)]
pub struct GameSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

/// Fully merged field values for a game write, validated as a whole before
/// anything is persisted
struct GameDraft {
    sport_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    venue_id: Option<i32>,
    date: chrono::NaiveDate,
    time: chrono::NaiveTime,
    home_score: Option<i32>,
    away_score: Option<i32>,
    status: GameStatus,
}

impl GameSeaOrmRepository {
    /// Create a new GameSeaOrmRepository
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Create a new game with `row_version = 0`
    pub async fn create(&self, request: GameCreateRequest) -> AppResult<Game> {
        let draft = GameDraft {
            sport_id: request.sport_id,
            home_team_id: request.home_team_id,
            away_team_id: request.away_team_id,
            venue_id: request.venue_id,
            date: request.date,
            time: request.time,
            home_score: request.home_score,
            away_score: request.away_score,
            status: request.status,
        };

        let txn = self.connection.begin().await?;

        Self::validate_draft(&txn, &draft).await?;

        let active_model = games::ActiveModel {
            sport_id: Set(draft.sport_id),
            home_team_id: Set(draft.home_team_id),
            away_team_id: Set(draft.away_team_id),
            venue_id: Set(draft.venue_id),
            date: Set(draft.date),
            time: Set(draft.time),
            home_score: Set(draft.home_score),
            away_score: Set(draft.away_score),
            status: Set(draft.status.as_str().to_string()),
            created_at: Set(Utc::now()),
            row_version: Set(0),
            ..Default::default()
        };

        let model = active_model.insert(&txn).await?;
        txn.commit().await?;

        debug!(
            "Created game {} ({} vs {} on {})",
            model.id, model.home_team_id, model.away_team_id, model.date
        );

        Ok(model.into())
    }

    /// Apply a partial update guarded by the client's observed `row_version`
    ///
    /// The whole read-compare-write sequence runs inside one transaction, and
    /// the UPDATE itself repeats the version guard so a writer that commits
    /// between our read and our write still loses cleanly with a conflict
    /// instead of being silently overwritten.
    pub async fn update(&self, id: i32, request: GameUpdateRequest) -> AppResult<Game> {
        let expected = request.row_version;
        let txn = self.connection.begin().await?;

        let current = Games::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("game", id))?;

        if current.row_version != expected {
            return Err(AppError::conflict("game", id, expected, current.row_version));
        }

        let draft = GameDraft {
            sport_id: request.sport_id.unwrap_or(current.sport_id),
            home_team_id: request.home_team_id.unwrap_or(current.home_team_id),
            away_team_id: request.away_team_id.unwrap_or(current.away_team_id),
            venue_id: request.venue_id.unwrap_or(current.venue_id),
            date: request.date.unwrap_or(current.date),
            time: request.time.unwrap_or(current.time),
            home_score: request.home_score.unwrap_or(current.home_score),
            away_score: request.away_score.unwrap_or(current.away_score),
            status: request
                .status
                .unwrap_or_else(|| GameStatus::from_str(&current.status)),
        };

        Self::validate_draft(&txn, &draft).await?;

        let active_model = games::ActiveModel {
            sport_id: Set(draft.sport_id),
            home_team_id: Set(draft.home_team_id),
            away_team_id: Set(draft.away_team_id),
            venue_id: Set(draft.venue_id),
            date: Set(draft.date),
            time: Set(draft.time),
            home_score: Set(draft.home_score),
            away_score: Set(draft.away_score),
            status: Set(draft.status.as_str().to_string()),
            row_version: Set(expected + 1),
            ..Default::default()
        };

        let result = Games::update_many()
            .set(active_model)
            .filter(games::Column::Id.eq(id))
            .filter(games::Column::RowVersion.eq(expected))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            // Lost the race between our read and our write; re-read so the
            // conflict carries the committed version, not the stale one
            let now = Games::find_by_id(id).one(&txn).await?;
            return Err(match now {
                Some(row) => AppError::conflict("game", id, expected, row.row_version),
                None => AppError::not_found("game", id),
            });
        }

        txn.commit().await?;

        debug!("Updated game {} to row_version {}", id, expected + 1);

        Ok(Game {
            id,
            sport_id: draft.sport_id,
            home_team_id: draft.home_team_id,
            away_team_id: draft.away_team_id,
            venue_id: draft.venue_id,
            date: draft.date,
            time: draft.time,
            home_score: draft.home_score,
            away_score: draft.away_score,
            status: draft.status,
            created_at: current.created_at,
            row_version: expected + 1,
        })
    }

    /// Delete a game, optionally guarded by the client's observed
    /// `row_version`
    pub async fn delete(&self, id: i32, expected_row_version: Option<i32>) -> AppResult<()> {
        let txn = self.connection.begin().await?;

        let current = Games::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("game", id))?;

        let mut delete = Games::delete_many().filter(games::Column::Id.eq(id));

        if let Some(expected) = expected_row_version {
            if current.row_version != expected {
                return Err(AppError::conflict("game", id, expected, current.row_version));
            }
            delete = delete.filter(games::Column::RowVersion.eq(expected));
        }

        let result = delete.exec(&txn).await?;
        if result.rows_affected == 0 {
            // Lost the race. With a version guard and the row still present
            // that is a conflict against the committed version; a vanished
            // row (or an unguarded delete, which only misses when the row is
            // gone) is not found.
            let now = Games::find_by_id(id).one(&txn).await?;
            return Err(match (expected_row_version, now) {
                (Some(expected), Some(row)) => {
                    AppError::conflict("game", id, expected, row.row_version)
                }
                _ => AppError::not_found("game", id),
            });
        }

        txn.commit().await?;

        debug!("Deleted game {}", id);
        Ok(())
    }

    /// Point lookup of a single game
    pub async fn find_by_id(&self, id: i32) -> AppResult<Game> {
        let model = Games::find_by_id(id)
            .one(&*self.connection)
            .await?
            .ok_or_else(|| AppError::not_found("game", id))?;

        Ok(model.into())
    }

    /// List games matching the filters, ordered by (date, time) ascending
    ///
    /// The ordering is deterministic (id breaks date+time ties) so report
    /// rows and UI listings are reproducible.
    pub async fn list(&self, filters: &GameFilters) -> AppResult<Vec<Game>> {
        let mut query = Games::find();

        if let Some(sport_id) = filters.sport_id {
            query = query.filter(games::Column::SportId.eq(sport_id));
        }
        if let Some(team_id) = filters.team_id {
            query = query.filter(
                Condition::any()
                    .add(games::Column::HomeTeamId.eq(team_id))
                    .add(games::Column::AwayTeamId.eq(team_id)),
            );
        }
        if let Some(from) = filters.from {
            query = query.filter(games::Column::Date.gte(from));
        }
        if let Some(to) = filters.to {
            query = query.filter(games::Column::Date.lte(to));
        }

        let models = query
            .order_by_asc(games::Column::Date)
            .order_by_asc(games::Column::Time)
            .order_by_asc(games::Column::Id)
            .all(&*self.connection)
            .await?;

        Ok(models.into_iter().map(Game::from).collect())
    }

    /// Validate the merged field values against invariants and reference
    /// data, inside the caller's transaction and before any mutation
    async fn validate_draft<C: ConnectionTrait>(conn: &C, draft: &GameDraft) -> AppResult<()> {
        if draft.home_team_id == draft.away_team_id {
            return Err(AppError::validation(
                "home_team_id and away_team_id must be different teams",
            ));
        }

        for score in [draft.home_score, draft.away_score].into_iter().flatten() {
            if score < 0 {
                return Err(AppError::validation("scores must be non-negative"));
            }
        }

        if draft.status == GameStatus::Final
            && (draft.home_score.is_none() || draft.away_score.is_none())
        {
            return Err(AppError::validation(
                "a final game requires both home_score and away_score",
            ));
        }

        Sports::find_by_id(draft.sport_id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::not_found("sport", draft.sport_id))?;

        for (label, team_id) in [("home", draft.home_team_id), ("away", draft.away_team_id)] {
            let team = Teams::find_by_id(team_id)
                .one(conn)
                .await?
                .ok_or_else(|| AppError::not_found("team", team_id))?;

            if team.sport_id != draft.sport_id {
                return Err(AppError::validation(format!(
                    "{label} team {team_id} does not play sport {}",
                    draft.sport_id
                )));
            }
        }

        if let Some(venue_id) = draft.venue_id {
            Venues::find_by_id(venue_id)
                .one(conn)
                .await?
                .ok_or_else(|| AppError::not_found("venue", venue_id))?;
        }

        Ok(())
    }
}
