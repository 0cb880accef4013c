//! Review service for posting, editing and listing reviews.
//!
//! Vote state is owned by `VotingService`; nothing here writes counters, score,
//! voters or the version.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, review::ReviewRepository},
    error::{auth::AuthError, AppError},
    model::review::{CreateReviewParam, Review, UpdateReviewParam},
};

/// Inclusive bounds accepted for `rating`.
const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All reviews ranked by score, up votes and recency.
    pub async fn get_all_ranked(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all_ranked().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_by_game(game_id).await?)
    }

    /// Posts a review on a game.
    ///
    /// # Arguments
    /// - `param` - Game, author and review payload
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review with zeroed vote state
    /// - `Err(AppError::BadRequest)` - Empty content or rating out of range
    /// - `Err(AppError::NotFound)` - The game does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, AppError> {
        validate_content(&param.content)?;
        validate_rating(param.rating)?;

        if GameRepository::new(self.db)
            .find_by_id(param.game_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let review = ReviewRepository::new(self.db).create(param).await?;

        tracing::info!(
            review_id = review.id,
            game_id = review.game_id,
            user_id = review.user_id,
            "Posted review"
        );

        Ok(review)
    }

    /// Edits the content or rating of a review.
    ///
    /// # Arguments
    /// - `user_id` - The caller, who must be the review's author
    /// - `param` - Review id and the fields to change
    ///
    /// # Returns
    /// - `Ok(Review)` - The updated review
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::AuthErr(NotReviewAuthor))` - Caller did not write the review
    /// - `Err(AppError::BadRequest)` - Empty content or rating out of range
    pub async fn update(&self, user_id: i32, param: UpdateReviewParam) -> Result<Review, AppError> {
        let review = self.get_by_id(param.id).await?;

        if review.user_id != user_id {
            return Err(AuthError::NotReviewAuthor {
                user_id,
                review_id: review.id,
            }
            .into());
        }

        if let Some(content) = &param.content {
            validate_content(content)?;
        }
        if let Some(rating) = param.rating {
            validate_rating(rating)?;
        }

        ReviewRepository::new(self.db)
            .update_payload(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("Review content is required".to_string()));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), AppError> {
    if !rating.is_finite() || !RATING_RANGE.contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn create_requires_existing_game() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db();
        let user = factory::create_user(db).await?;

        let result = ReviewService::new(db)
            .create(CreateReviewParam {
                game_id: 77,
                user_id: user.id,
                title: None,
                content: "Where is this game?".to_string(),
                rating: 5.0,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_rating() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db();
        let user = factory::create_user(db).await?;
        let game = factory::create_game(db).await?;

        let result = ReviewService::new(db)
            .create(CreateReviewParam {
                game_id: game.id,
                user_id: user.id,
                title: None,
                content: "Eleven out of ten".to_string(),
                rating: 11.0,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn only_author_can_update() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db();
        let (author, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
        let stranger = factory::create_user(db).await?;
        let service = ReviewService::new(db);

        let denied = service
            .update(
                stranger.id,
                UpdateReviewParam {
                    id: review.id,
                    content: Some("Hijacked".to_string()),
                    rating: None,
                },
            )
            .await;
        let updated = service
            .update(
                author.id,
                UpdateReviewParam {
                    id: review.id,
                    content: None,
                    rating: Some(9.0),
                },
            )
            .await?;

        assert!(matches!(
            denied,
            Err(AppError::AuthErr(AuthError::NotReviewAuthor { .. }))
        ));
        assert_eq!(updated.rating, 9.0);
        assert_eq!(updated.content, review.content);

        Ok(())
    }

    #[tokio::test]
    async fn reviews_by_user_only_include_own() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db();
        let (author, game, review) = factory::helpers::create_review_with_dependencies(db).await?;
        let other = factory::create_user(db).await?;
        factory::create_review(db, game.id, other.id).await?;

        let own = ReviewService::new(db).get_by_user(author.id).await?;

        assert_eq!(own.len(), 1);
        assert_eq!(own[0].id, review.id);

        Ok(())
    }
}
