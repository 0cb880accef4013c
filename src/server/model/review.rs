//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::server::model::vote::{UserVoteDetails, VoteLedger, VoteTally};

/// A review of a game, including its vote state.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub game_id: i32,
    /// Author of the review.
    pub user_id: i32,
    pub title: Option<String>,
    pub content: String,
    pub rating: f64,
    pub tally: VoteTally,
    /// Optimistic concurrency token for vote writes.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            rating: entity.rating,
            tally: VoteTally {
                up_votes: entity.up_votes,
                down_votes: entity.down_votes,
                score: entity.score,
                voters: VoteLedger::from_stored(entity.voters),
            },
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn vote_details(&self, caller: Option<i32>) -> UserVoteDetails {
        UserVoteDetails::for_caller(&self.tally.voters, caller)
    }
}

/// Parameters for posting a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub game_id: i32,
    pub user_id: i32,
    pub title: Option<String>,
    pub content: String,
    pub rating: f64,
}

/// Edit of a review's payload; vote state is never touched here.
#[derive(Debug, Clone)]
pub struct UpdateReviewParam {
    pub id: i32,
    pub content: Option<String>,
    pub rating: Option<f64>,
}
