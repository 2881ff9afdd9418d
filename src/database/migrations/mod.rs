//! SeaORM migrations
//!
//! Database-agnostic migrations that work across SQLite and PostgreSQL.

use sea_orm_migration::prelude::*;

pub mod m20260115_000001_initial_schema;
pub mod m20260115_000002_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_initial_schema::Migration),
            Box::new(m20260115_000002_seed_reference_data::Migration),
        ]
    }
}
