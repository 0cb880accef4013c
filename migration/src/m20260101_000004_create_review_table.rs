use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260101_000001_create_user_table::User, m20260101_000003_create_game_table::Game};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::GameId))
                    .col(integer(Review::UserId))
                    .col(string_null(Review::Title))
                    .col(text(Review::Content))
                    .col(double(Review::Rating))
                    .col(integer(Review::UpVotes).default(0))
                    .col(integer(Review::DownVotes).default(0))
                    .col(integer(Review::Score).default(0))
                    .col(json(Review::Voters))
                    .col(integer(Review::Version).default(0))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Review::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_game_id")
                            .from(Review::Table, Review::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_game_id")
                    .table(Review::Table)
                    .col(Review::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    GameId,
    UserId,
    Title,
    Content,
    Rating,
    UpVotes,
    DownVotes,
    Score,
    Voters,
    Version,
    CreatedAt,
    UpdatedAt,
}
