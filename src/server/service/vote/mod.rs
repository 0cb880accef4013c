//! Review voting.
//!
//! `VotingService::vote` is a read-modify-write on the review row guarded by the
//! row's `version`. A write that loses the race is retried against fresh state, so
//! concurrent voters never overwrite each other's ledger changes.

pub mod score;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::review::ReviewRepository,
    error::AppError,
    model::{
        review::Review,
        vote::{VoteParam, VoteTally},
    },
};

/// Upper bound on read-modify-write rounds for one vote request.
pub const MAX_VOTE_ATTEMPTS: usize = 5;

/// Review persistence used by the vote loop.
trait VoteStore {
    async fn load(&self, review_id: i32) -> Result<Option<Review>, DbErr>;

    /// Returns `false` when `expected_version` is no longer current.
    async fn save(
        &self,
        review_id: i32,
        expected_version: i32,
        tally: &VoteTally,
    ) -> Result<bool, DbErr>;
}

impl VoteStore for ReviewRepository<'_> {
    async fn load(&self, review_id: i32) -> Result<Option<Review>, DbErr> {
        self.find_by_id(review_id).await
    }

    async fn save(
        &self,
        review_id: i32,
        expected_version: i32,
        tally: &VoteTally,
    ) -> Result<bool, DbErr> {
        self.save_votes(review_id, expected_version, tally).await
    }
}

pub struct VotingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VotingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Casts, withdraws or switches the caller's vote on a review.
    ///
    /// Loads the review, applies the transition for the caller's existing vote and
    /// saves counters, score and voters in one versioned write. When another writer
    /// updated the review in between, the whole transition is recomputed from the
    /// new state.
    ///
    /// # Arguments
    /// - `param` - Vote direction, review and voter
    ///
    /// # Returns
    /// - `Ok(true)` - Vote applied
    /// - `Err(AppError::NotFound)` - Review does not exist; nothing written
    /// - `Err(AppError::Conflict)` - Lost the race `MAX_VOTE_ATTEMPTS` times
    /// - `Err(AppError::DbErr)` - Database error during load or save
    pub async fn vote(&self, param: VoteParam) -> Result<bool, AppError> {
        cast_vote(&ReviewRepository::new(self.db), param).await
    }
}

/// Vote loop shared by the service and tests that need to control persistence.
async fn cast_vote(store: &impl VoteStore, param: VoteParam) -> Result<bool, AppError> {
    for attempt in 1..=MAX_VOTE_ATTEMPTS {
        let Some(review) = store.load(param.review_id).await? else {
            return Err(AppError::NotFound("Review not found".to_string()));
        };

        let mut tally = review.tally;
        let transition = score::apply(&mut tally, param.user_id, param.vote_type);

        if store.save(review.id, review.version, &tally).await? {
            tracing::debug!(
                review_id = review.id,
                user_id = param.user_id,
                ?transition,
                "Vote applied"
            );
            return Ok(true);
        }

        tracing::debug!(
            review_id = review.id,
            attempt,
            "Review changed during vote, retrying"
        );
    }

    Err(AppError::Conflict(format!(
        "Review {} is receiving too many concurrent votes, try again",
        param.review_id
    )))
}
