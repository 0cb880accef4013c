//! Review data repository.
//!
//! Besides ordinary CRUD this repository owns the compare-and-swap write used by the
//! voting service. Vote state (`up_votes`, `down_votes`, `score`, `voters`) is only ever
//! written through [`ReviewRepository::save_votes`], and payload edits never touch it.

use chrono::Utc;
use entity::review::Voters;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    review::{CreateReviewParam, Review, UpdateReviewParam},
    vote::VoteTally,
};

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review with zeroed vote state.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, DbErr> {
        let now = Utc::now();
        let entity = entity::review::ActiveModel {
            game_id: ActiveValue::Set(param.game_id),
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            rating: ActiveValue::Set(param.rating),
            up_votes: ActiveValue::Set(0),
            down_votes: ActiveValue::Set(0),
            score: ActiveValue::Set(0),
            voters: ActiveValue::Set(Voters::default()),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Finds a review by id.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Review found, including its current version
    /// - `Ok(None)` - No review with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets all reviews ranked by score, then up votes, then newest first.
    pub async fn get_all_ranked(&self) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::Score)
            .order_by_desc(entity::review::Column::UpVotes)
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets all reviews written by a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets all reviews of a game, newest first.
    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::GameId.eq(game_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets the ratings of every review of a game.
    pub async fn get_ratings_for_game(&self, game_id: i32) -> Result<Vec<f64>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::GameId.eq(game_id))
            .into_tuple::<f64>()
            .all(self.db)
            .await
    }

    /// Updates the payload of a review.
    ///
    /// Only `content`, `rating` and `updated_at` are written; the vote columns and
    /// the version are left alone so edits never race with votes.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Updated review
    /// - `Ok(None)` - No review with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_payload(&self, param: UpdateReviewParam) -> Result<Option<Review>, DbErr> {
        let mut update = entity::prelude::Review::update_many()
            .filter(entity::review::Column::Id.eq(param.id))
            .col_expr(
                entity::review::Column::UpdatedAt,
                Expr::value(Utc::now()),
            );

        if let Some(content) = param.content {
            update = update.col_expr(entity::review::Column::Content, Expr::value(content));
        }
        if let Some(rating) = param.rating {
            update = update.col_expr(entity::review::Column::Rating, Expr::value(rating));
        }

        let result = update.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(param.id).await
    }

    /// Writes new vote state if the review is still at `expected_version`.
    ///
    /// Counters, score, voters and the incremented version are written by a single
    /// `UPDATE ... WHERE id = ? AND version = ?`, so either all of them change or none.
    ///
    /// # Arguments
    /// - `review_id` - Review to update
    /// - `expected_version` - Version the tally was computed from
    /// - `tally` - New vote state
    ///
    /// # Returns
    /// - `Ok(true)` - State written, version incremented
    /// - `Ok(false)` - Review missing or modified since it was read; nothing written
    /// - `Err(DbErr)` - Database error during update
    pub async fn save_votes(
        &self,
        review_id: i32,
        expected_version: i32,
        tally: &VoteTally,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::update_many()
            .filter(entity::review::Column::Id.eq(review_id))
            .filter(entity::review::Column::Version.eq(expected_version))
            .col_expr(entity::review::Column::UpVotes, Expr::value(tally.up_votes))
            .col_expr(
                entity::review::Column::DownVotes,
                Expr::value(tally.down_votes),
            )
            .col_expr(entity::review::Column::Score, Expr::value(tally.score))
            .col_expr(
                entity::review::Column::Voters,
                Expr::value(tally.voters.to_stored()),
            )
            .col_expr(
                entity::review::Column::Version,
                Expr::value(expected_version + 1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes every review of a game.
    pub async fn delete_by_game(&self, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Review::delete_many()
            .filter(entity::review::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
