use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Title))
                    .col(text(Game::Description))
                    .col(json(Game::Platform))
                    .col(integer(Game::ReleasedYear))
                    .col(string(Game::CoverImage))
                    .col(json(Game::Genre))
                    .col(timestamp_with_time_zone(Game::ReleaseDate))
                    .col(string(Game::ManufacturerName))
                    .col(string(Game::Developer))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Game::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_released_year")
                    .table(Game::Table)
                    .col(Game::ReleasedYear)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Title,
    Description,
    Platform,
    ReleasedYear,
    CoverImage,
    Genre,
    ReleaseDate,
    ManufacturerName,
    Developer,
    CreatedAt,
    UpdatedAt,
}
