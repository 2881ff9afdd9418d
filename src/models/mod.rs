use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::games;

/// Serde helpers for `HH:MM` wall-clock times
///
/// Game times are minute-granular on the wire (`"18:30"`); chrono's default
/// `NaiveTime` format would leak seconds into every payload.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map_err(|_| format!("invalid time '{s}', expected HH:MM"))
    }
}

mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::hhmm::parse(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Distinguishes "field absent" from "field explicitly null" in a patch.
/// Used with `#[serde(default)]`: absent stays `None`, `null` becomes
/// `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Final,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Final => "final",
        }
    }

    /// Parse a stored status string, defaulting to Scheduled for unknown
    /// values
    pub fn from_str(s: &str) -> Self {
        match s {
            "final" => GameStatus::Final,
            _ => GameStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(description = "A scheduled or completed league game")]
pub struct Game {
    pub id: i32,
    pub sport_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub venue_id: Option<i32>,
    #[schema(example = "2024-03-01")]
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "18:00")]
    pub time: NaiveTime,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
    /// Optimistic-concurrency version; clients must echo this back on
    /// update/delete
    pub row_version: i32,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            sport_id: model.sport_id,
            home_team_id: model.home_team_id,
            away_team_id: model.away_team_id,
            venue_id: model.venue_id,
            date: model.date,
            time: model.time,
            home_score: model.home_score,
            away_score: model.away_score,
            status: GameStatus::from_str(&model.status),
            created_at: model.created_at,
            row_version: model.row_version,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(description = "Payload for creating a game")]
pub struct GameCreateRequest {
    pub sport_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub venue_id: Option<i32>,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "18:00")]
    pub time: NaiveTime,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    #[serde(default = "default_status")]
    pub status: GameStatus,
}

fn default_status() -> GameStatus {
    GameStatus::Scheduled
}

/// Partial update of a game. Fields left out of the payload are kept;
/// `venue_id`, `home_score` and `away_score` may be explicitly `null` to
/// clear them.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GameUpdateRequest {
    /// The row_version the client read; the update is rejected with a
    /// conflict when it no longer matches
    pub row_version: i32,
    pub sport_id: Option<i32>,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub venue_id: Option<Option<i32>>,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "hhmm_opt::deserialize")]
    #[schema(value_type = Option<String>, example = "20:15")]
    pub time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub home_score: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub away_score: Option<Option<i32>>,
    pub status: Option<GameStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GameDeleteRequest {
    /// Optional version guard; when present a stale value is rejected with a
    /// conflict
    pub row_version: Option<i32>,
}

/// Typed filters for game listing and reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilters {
    pub sport_id: Option<i32>,
    pub team_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Sport {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Team {
    pub id: i32,
    pub sport_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_status_round_trip() {
        assert_eq!(GameStatus::from_str("final"), GameStatus::Final);
        assert_eq!(GameStatus::from_str("scheduled"), GameStatus::Scheduled);
        assert_eq!(GameStatus::from_str("garbage"), GameStatus::Scheduled);
        assert_eq!(GameStatus::Final.as_str(), "final");
    }

    #[test]
    fn test_hhmm_parse() {
        assert_eq!(
            hhmm::parse("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert_eq!(
            hhmm::parse("18:30:15").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 15).unwrap()
        );
        assert!(hhmm::parse("6pm").is_err());
    }

    #[test]
    fn test_update_request_distinguishes_absent_from_null() {
        let patch: GameUpdateRequest =
            serde_json::from_str(r#"{"row_version": 2, "home_score": null}"#).unwrap();
        assert_eq!(patch.home_score, Some(None));
        assert_eq!(patch.away_score, None);
        assert_eq!(patch.row_version, 2);
    }

    #[test]
    fn test_update_request_time_parses_hhmm() {
        let patch: GameUpdateRequest =
            serde_json::from_str(r#"{"row_version": 0, "time": "20:15"}"#).unwrap();
        assert_eq!(patch.time, NaiveTime::from_hms_opt(20, 15, 0));
    }
}
