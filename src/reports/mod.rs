//! Filtered report and aggregation engine
//!
//! Read-only: rows come from the game repository under the same filters and
//! ordering as the plain listing, and the stats are derived from those rows.
//! The engine holds no transaction; read-after-write consistency follows from
//! reading the same store the repository commits to.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::database::repositories::GameSeaOrmRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{Game, GameFilters, GameStatus};

/// Typed report query; `from`/`to` are required and inclusive
#[derive(Debug, Clone)]
pub struct ReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sport_id: Option<i32>,
    pub team_id: Option<i32>,
}

/// The filters a report was computed under, echoed back to the caller
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportFilters {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sport_id: Option<i32>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportStats {
    pub total_games: usize,
    pub finals_count: usize,
    /// Mean of home+away points over finals; null when there are no finals
    pub avg_points_per_final: Option<f64>,
    /// Fraction of finals the filtered team won; draws count as played but
    /// not won. Null without a team filter or without qualifying finals.
    pub win_rate_for_team: Option<f64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameReport {
    pub filters: ReportFilters,
    pub stats: ReportStats,
    pub rows: Vec<Game>,
}

/// Stateless report engine over the game repository
#[derive(Clone)]
pub struct ReportEngine {
    games: GameSeaOrmRepository,
}

impl ReportEngine {
    pub fn new(games: GameSeaOrmRepository) -> Self {
        Self { games }
    }

    pub async fn run(&self, query: ReportQuery) -> AppResult<GameReport> {
        if query.from > query.to {
            return Err(AppError::validation(format!(
                "invalid date range: from {} is after to {}",
                query.from, query.to
            )));
        }

        let rows = self
            .games
            .list(&GameFilters {
                sport_id: query.sport_id,
                team_id: query.team_id,
                from: Some(query.from),
                to: Some(query.to),
            })
            .await?;

        let stats = Self::compute_stats(&rows, query.team_id);

        Ok(GameReport {
            filters: ReportFilters {
                from: query.from,
                to: query.to,
                sport_id: query.sport_id,
                team_id: query.team_id,
            },
            stats,
            rows,
        })
    }

    fn compute_stats(rows: &[Game], team_id: Option<i32>) -> ReportStats {
        let finals: Vec<&Game> = rows
            .iter()
            .filter(|g| g.status == GameStatus::Final)
            .collect();

        let mut total_points = 0i64;
        let mut counted = 0usize;
        for game in &finals {
            if let (Some(home), Some(away)) = (game.home_score, game.away_score) {
                total_points += i64::from(home) + i64::from(away);
                counted += 1;
            }
        }
        let avg_points_per_final = if counted > 0 {
            Some(total_points as f64 / counted as f64)
        } else {
            None
        };

        let win_rate_for_team = team_id.and_then(|team_id| {
            let mut wins = 0usize;
            let mut played = 0usize;
            for game in &finals {
                let (Some(home), Some(away)) = (game.home_score, game.away_score) else {
                    continue;
                };
                if game.home_team_id != team_id && game.away_team_id != team_id {
                    continue;
                }
                played += 1;
                // Draws count as played but not won
                if (game.home_team_id == team_id && home > away)
                    || (game.away_team_id == team_id && away > home)
                {
                    wins += 1;
                }
            }
            if played > 0 {
                Some(wins as f64 / played as f64)
            } else {
                None
            }
        });

        ReportStats {
            total_games: rows.len(),
            finals_count: finals.len(),
            avg_points_per_final,
            win_rate_for_team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};

    fn final_game(id: i32, home_team: i32, away_team: i32, home: i32, away: i32) -> Game {
        Game {
            id,
            sport_id: 1,
            home_team_id: home_team,
            away_team_id: away_team,
            venue_id: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            home_score: Some(home),
            away_score: Some(away),
            status: GameStatus::Final,
            created_at: Utc::now(),
            row_version: 0,
        }
    }

    #[test]
    fn test_stats_empty_rows() {
        let stats = ReportEngine::compute_stats(&[], Some(1));
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.finals_count, 0);
        assert_eq!(stats.avg_points_per_final, None);
        assert_eq!(stats.win_rate_for_team, None);
    }

    #[test]
    fn test_win_rate_counts_draws_as_played() {
        // Team 10: two wins, one loss, one draw => 2/4
        let rows = vec![
            final_game(1, 10, 11, 3, 1),
            final_game(2, 11, 10, 0, 2),
            final_game(3, 10, 11, 1, 4),
            final_game(4, 10, 11, 2, 2),
        ];
        let stats = ReportEngine::compute_stats(&rows, Some(10));
        assert_eq!(stats.finals_count, 4);
        assert_eq!(stats.win_rate_for_team, Some(0.5));
    }

    #[test]
    fn test_win_rate_none_without_team_filter() {
        let rows = vec![final_game(1, 10, 11, 3, 1)];
        let stats = ReportEngine::compute_stats(&rows, None);
        assert_eq!(stats.win_rate_for_team, None);
    }

    #[test]
    fn test_avg_points_skips_finals_missing_scores() {
        let mut partial = final_game(2, 10, 11, 0, 0);
        partial.home_score = None;
        let rows = vec![final_game(1, 10, 11, 3, 1), partial];
        let stats = ReportEngine::compute_stats(&rows, None);
        assert_eq!(stats.finals_count, 2);
        assert_eq!(stats.avg_points_per_final, Some(4.0));
    }
}
