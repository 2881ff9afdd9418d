//! Report engine integration tests
//!
//! Seeded reference ids come from the reference-data migration: sport 1 is
//! Basketball with teams 1..=3.

use chrono::{NaiveDate, NaiveTime};

use scorebook::{
    config::DatabaseConfig,
    database::{Database, repositories::GameSeaOrmRepository},
    errors::AppError,
    models::{GameCreateRequest, GameStatus, GameUpdateRequest},
    reports::{ReportEngine, ReportQuery},
};

async fn setup() -> (Database, GameSeaOrmRepository, ReportEngine) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
    };
    let database = Database::new(&config).await.expect("Failed to connect");
    database.migrate().await.expect("Failed to run migrations");
    let repo = GameSeaOrmRepository::new(database.connection());
    let engine = ReportEngine::new(repo.clone());
    (database, repo, engine)
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn game(
    day: u32,
    hour: u32,
    home: i32,
    away: i32,
    score: Option<(i32, i32)>,
) -> GameCreateRequest {
    GameCreateRequest {
        sport_id: 1,
        home_team_id: home,
        away_team_id: away,
        venue_id: None,
        date: date(day),
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        home_score: score.map(|(h, _)| h),
        away_score: score.map(|(_, a)| a),
        status: if score.is_some() {
            GameStatus::Final
        } else {
            GameStatus::Scheduled
        },
    }
}

fn range(from: u32, to: u32) -> ReportQuery {
    ReportQuery {
        from: date(from),
        to: date(to),
        sport_id: None,
        team_id: None,
    }
}

#[tokio::test]
async fn test_report_rows_are_ordered_and_counted() {
    let (_db, repo, engine) = setup().await;

    repo.create(game(3, 20, 1, 2, None)).await.unwrap();
    repo.create(game(1, 18, 2, 3, Some((64, 58)))).await.unwrap();
    repo.create(game(1, 16, 3, 1, None)).await.unwrap();

    let report = engine.run(range(1, 31)).await.unwrap();

    assert_eq!(report.stats.total_games, report.rows.len());
    assert_eq!(report.stats.total_games, 3);
    let keys: Vec<_> = report.rows.iter().map(|g| (g.date, g.time)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[tokio::test]
async fn test_report_respects_date_range() {
    let (_db, repo, engine) = setup().await;

    repo.create(game(1, 18, 1, 2, None)).await.unwrap();
    repo.create(game(15, 18, 1, 2, None)).await.unwrap();
    repo.create(game(30, 18, 1, 2, None)).await.unwrap();

    let report = engine.run(range(1, 15)).await.unwrap();
    assert_eq!(report.stats.total_games, 2);
    assert_eq!(report.filters.from, date(1));
    assert_eq!(report.filters.to, date(15));
}

#[tokio::test]
async fn test_report_rejects_inverted_range() {
    let (_db, _repo, engine) = setup().await;

    let err = engine.run(range(20, 10)).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_report_zero_finals_edge_case() {
    let (_db, repo, engine) = setup().await;

    repo.create(game(1, 18, 1, 2, None)).await.unwrap();
    repo.create(game(2, 18, 2, 3, None)).await.unwrap();

    let report = engine.run(range(1, 5)).await.unwrap();
    assert_eq!(report.stats.total_games, 2);
    assert_eq!(report.stats.finals_count, 0);
    assert_eq!(report.stats.avg_points_per_final, None);
    assert_eq!(report.stats.win_rate_for_team, None);
}

#[tokio::test]
async fn test_win_rate_two_wins_one_loss_one_draw() {
    let (_db, repo, engine) = setup().await;

    // Team 1: wins twice, loses once, draws once => 2 / 4
    repo.create(game(1, 18, 1, 2, Some((30, 20)))).await.unwrap();
    repo.create(game(2, 18, 2, 1, Some((10, 25)))).await.unwrap();
    repo.create(game(3, 18, 1, 3, Some((12, 40)))).await.unwrap();
    repo.create(game(4, 18, 3, 1, Some((22, 22)))).await.unwrap();
    // A final between other teams stays out of the win rate
    repo.create(game(5, 18, 2, 3, Some((15, 10)))).await.unwrap();

    let mut query = range(1, 10);
    query.team_id = Some(1);
    let report = engine.run(query).await.unwrap();

    assert_eq!(report.stats.finals_count, 4);
    assert_eq!(report.stats.win_rate_for_team, Some(0.5));
}

#[tokio::test]
async fn test_end_to_end_create_update_report() {
    let (_db, repo, engine) = setup().await;

    // create Game(sport 1, home 1, away 2, 2024-03-01 18:00, scheduled)
    let created = repo.create(game(1, 18, 1, 2, None)).await.unwrap();
    assert_eq!(created.row_version, 0);

    // update to a 3-1 final against row_version 0
    let updated = repo
        .update(
            created.id,
            GameUpdateRequest {
                row_version: 0,
                home_score: Some(Some(3)),
                away_score: Some(Some(1)),
                status: Some(GameStatus::Final),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.row_version, 1);

    // the report reflects the committed write immediately
    let mut query = range(1, 1);
    query.sport_id = Some(1);
    let report = engine.run(query).await.unwrap();

    assert_eq!(report.stats.total_games, 1);
    assert_eq!(report.stats.finals_count, 1);
    assert_eq!(report.stats.avg_points_per_final, Some(4.0));
    assert_eq!(report.rows[0].row_version, 1);
}
