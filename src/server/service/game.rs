//! Game catalog service.
//!
//! Wraps the game repository with existence checks, validation and the derived
//! `averageRating` field.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, review::ReviewRepository},
    error::AppError,
    model::game::{CreateGameParam, Game, GameFilter, UpdateGameParam},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches the catalog.
    ///
    /// # Arguments
    /// - `filter` - Title search, tag filters, year bounds and sort order
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Matching games in the requested order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search(&self, filter: GameFilter) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).search(&filter).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, AppError> {
        Ok(GameRepository::new(self.db).find_by_id(id).await?)
    }

    /// Retrieves a game, failing with `NotFound` when missing.
    pub async fn get_by_id(&self, id: i32) -> Result<Game, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// Adds a game to the catalog.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(AppError::BadRequest)` - Empty title
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("Game title is required".to_string()));
        }

        let game = GameRepository::new(self.db).create(param).await?;

        tracing::info!(game_id = game.id, title = %game.title, "Added game");

        Ok(game)
    }

    /// Applies a partial update to a game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The updated game
    /// - `Err(AppError::BadRequest)` - Title provided but empty
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn update(&self, param: UpdateGameParam) -> Result<Game, AppError> {
        if param.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::BadRequest("Game title cannot be empty".to_string()));
        }

        GameRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// Deletes a game along with its reviews.
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - The games remaining in the catalog
    /// - `Err(AppError::NotFound)` - No game with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Vec<Game>, AppError> {
        let game_repo = GameRepository::new(self.db);

        if game_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let removed_reviews = ReviewRepository::new(self.db).delete_by_game(id).await?;
        game_repo.delete(id).await?;

        tracing::info!(game_id = id, removed_reviews, "Deleted game");

        Ok(game_repo.get_all().await?)
    }

    /// Mean rating of a game's reviews, rounded to two decimals.
    ///
    /// A game without reviews has an average of `0`.
    pub async fn average_rating(&self, game_id: i32) -> Result<f64, AppError> {
        let ratings = ReviewRepository::new(self.db)
            .get_ratings_for_game(game_id)
            .await?;

        Ok(round_average(&ratings))
    }
}

fn round_average(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 100.0).round() / 100.0
}
