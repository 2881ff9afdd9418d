//! Seed reference data (sports, teams, venues)
//!
//! Sport, Team and Venue rows are created out-of-band from the service's
//! perspective and are read-only at runtime; seeding them in a migration
//! makes a freshly migrated database immediately usable. Games are not
//! seeded, they enter through the API.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sports = [(1, "Basketball"), (2, "Soccer"), (3, "Volleyball")];

        for (id, name) in sports {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Sports::Table)
                        .columns([Sports::Id, Sports::Name])
                        .values_panic([id.into(), name.into()])
                        .to_owned(),
                )
                .await?;
        }

        let teams = [
            (1, 1, "Boiler Ball A"),
            (2, 1, "Boiler Ball B"),
            (3, 1, "Riveters"),
            (4, 2, "Boiler FC"),
            (5, 2, "West Lafayette United"),
            (6, 2, "Ross-Ade Rovers"),
            (7, 3, "Spike Squad"),
            (8, 3, "Net Ninjas"),
            (9, 3, "Block Party"),
        ];

        for (id, sport_id, name) in teams {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Teams::Table)
                        .columns([Teams::Id, Teams::SportId, Teams::Name])
                        .values_panic([id.into(), sport_id.into(), name.into()])
                        .to_owned(),
                )
                .await?;
        }

        let venues = [
            (1, "CoRec Court 1", "CoRec"),
            (2, "CoRec Court 2", "CoRec"),
            (3, "Intramural Field A", "IM Fields"),
            (4, "Intramural Field B", "IM Fields"),
        ];

        for (id, name, location) in venues {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Venues::Table)
                        .columns([Venues::Id, Venues::Name, Venues::Location])
                        .values_panic([id.into(), name.into(), location.into()])
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Venues::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Teams::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Sports::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sports {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    SportId,
    Name,
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
    Name,
    Location,
}
