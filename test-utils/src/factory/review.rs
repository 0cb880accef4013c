//! Review factory for creating test review entities.

use chrono::Utc;
use entity::review::{Voter, Voters};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews.
///
/// Reviews start with zeroed counters and an empty voter list, matching what the
/// application writes when a review is posted. Use [`ReviewFactory::votes`] to seed
/// a review that already carries votes.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    user_id: i32,
    content: String,
    rating: f64,
    up_votes: i32,
    down_votes: i32,
    score: i32,
    voters: Vec<Voter>,
}

impl<'a> ReviewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, game_id: i32, user_id: i32) -> Self {
        Self {
            db,
            game_id,
            user_id,
            content: "Great game".to_string(),
            rating: 4.0,
            up_votes: 0,
            down_votes: 0,
            score: 0,
            voters: Vec::new(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Seeds counters and voters directly, bypassing the voting rules.
    pub fn votes(mut self, up_votes: i32, down_votes: i32, score: i32, voters: Vec<Voter>) -> Self {
        self.up_votes = up_votes;
        self.down_votes = down_votes;
        self.score = score;
        self.voters = voters;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            rating: ActiveValue::Set(self.rating),
            up_votes: ActiveValue::Set(self.up_votes),
            down_votes: ActiveValue::Set(self.down_votes),
            score: ActiveValue::Set(self.score),
            voters: ActiveValue::Set(Voters(self.voters)),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default content for the given game and author.
pub async fn create_review(
    db: &DatabaseConnection,
    game_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, game_id, user_id).build().await
}
