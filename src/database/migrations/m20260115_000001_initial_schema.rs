use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create tables in order of dependencies
        self.create_sports_table(manager).await?;
        self.create_teams_table(manager).await?;
        self.create_venues_table(manager).await?;
        self.create_games_table(manager).await?;

        // Create indexes
        self.create_indexes(manager).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sports::Table).to_owned())
            .await?;

        Ok(())
    }
}

impl Migration {
    async fn create_sports_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sports::Name)
                            .string_len(80)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn create_teams_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teams::SportId).integer().not_null())
                    .col(ColumnDef::new(Teams::Name).string_len(120).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_sport")
                            .from(Teams::Table, Teams::SportId)
                            .to(Sports::Table, Sports::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Team names are unique per sport, not globally
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_teams_sport_name")
                    .table(Teams::Table)
                    .col(Teams::SportId)
                    .col(Teams::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn create_venues_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Venues::Name)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Venues::Location).string_len(120))
                    .to_owned(),
            )
            .await
    }

    async fn create_games_table(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::SportId).integer().not_null())
                    .col(ColumnDef::new(Games::HomeTeamId).integer().not_null())
                    .col(ColumnDef::new(Games::AwayTeamId).integer().not_null())
                    .col(ColumnDef::new(Games::VenueId).integer())
                    .col(ColumnDef::new(Games::Date).date().not_null())
                    .col(ColumnDef::new(Games::Time).time().not_null())
                    .col(ColumnDef::new(Games::HomeScore).integer())
                    .col(ColumnDef::new(Games::AwayScore).integer())
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::RowVersion)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_sport")
                            .from(Games::Table, Games::SportId)
                            .to(Sports::Table, Sports::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_home_team")
                            .from(Games::Table, Games::HomeTeamId)
                            .to(Teams::Table, Teams::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_away_team")
                            .from(Games::Table, Games::AwayTeamId)
                            .to(Teams::Table, Teams::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_venue")
                            .from(Games::Table, Games::VenueId)
                            .to(Venues::Table, Venues::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn create_indexes(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        let indexes = [
            ("ix_teams_sport", Teams::Table.into_iden(), vec![Teams::SportId.into_iden()]),
            (
                "ix_games_sport_date",
                Games::Table.into_iden(),
                vec![Games::SportId.into_iden(), Games::Date.into_iden()],
            ),
            (
                "ix_games_home_date",
                Games::Table.into_iden(),
                vec![Games::HomeTeamId.into_iden(), Games::Date.into_iden()],
            ),
            (
                "ix_games_away_date",
                Games::Table.into_iden(),
                vec![Games::AwayTeamId.into_iden(), Games::Date.into_iden()],
            ),
            ("ix_games_venue", Games::Table.into_iden(), vec![Games::VenueId.into_iden()]),
        ];

        for (name, table, columns) in indexes {
            let mut index = Index::create();
            index.if_not_exists().name(name).table(table);
            for column in columns {
                index.col(column);
            }
            manager.create_index(index.to_owned()).await?;
        }

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

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    SportId,
    HomeTeamId,
    AwayTeamId,
    VenueId,
    Date,
    Time,
    HomeScore,
    AwayScore,
    Status,
    CreatedAt,
    RowVersion,
}
