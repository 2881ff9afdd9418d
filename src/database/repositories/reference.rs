//! Read-only lookup of sports, teams and venues
//!
//! Reference data is seeded out-of-band; this repository never mutates it.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::{prelude::*, sports, teams, venues};
use crate::errors::AppResult;
use crate::models::{Sport, Team, Venue};

#[derive(Clone)]
pub struct ReferenceSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl ReferenceSeaOrmRepository {
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    pub async fn list_sports(&self) -> AppResult<Vec<Sport>> {
        let models = Sports::find()
            .order_by_asc(sports::Column::Name)
            .all(&*self.connection)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Sport {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    pub async fn list_teams(&self, sport_id: Option<i32>) -> AppResult<Vec<Team>> {
        let mut query = Teams::find();
        if let Some(sport_id) = sport_id {
            query = query.filter(teams::Column::SportId.eq(sport_id));
        }

        let models = query
            .order_by_asc(teams::Column::Name)
            .all(&*self.connection)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Team {
                id: m.id,
                sport_id: m.sport_id,
                name: m.name,
            })
            .collect())
    }

    pub async fn list_venues(&self) -> AppResult<Vec<Venue>> {
        let models = Venues::find()
            .order_by_asc(venues::Column::Name)
            .all(&*self.connection)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Venue {
                id: m.id,
                name: m.name,
                location: m.location,
            })
            .collect())
    }
}
