//! Vote ledger and aggregate counters of a review.
//!
//! The ledger is the authoritative list of active votes. Counters and score are cached
//! aggregates kept in step with it by applying transitions from
//! `service::vote::score`, never by recounting.

pub use entity::review::VoteType;

/// One active vote on a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRecord {
    pub user_id: i32,
    pub vote_type: VoteType,
}

/// Ordered list of active votes, at most one per user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLedger(Vec<VoteRecord>);

impl VoteLedger {
    /// Builds a ledger from the stored `voters` column.
    ///
    /// Should a corrupted row carry several records for one user, only the first is
    /// kept so that the one-vote-per-user invariant holds from here on.
    pub fn from_stored(voters: entity::review::Voters) -> Self {
        let mut ledger = Self::default();
        for voter in voters.0 {
            if ledger.vote_of(voter.user_id).is_none() {
                ledger.0.push(VoteRecord {
                    user_id: voter.user_id,
                    vote_type: voter.vote_type,
                });
            }
        }
        ledger
    }

    pub fn to_stored(&self) -> entity::review::Voters {
        entity::review::Voters(
            self.0
                .iter()
                .map(|record| entity::review::Voter {
                    user_id: record.user_id,
                    vote_type: record.vote_type,
                })
                .collect(),
        )
    }

    /// Current vote of `user_id`, if any.
    pub fn vote_of(&self, user_id: i32) -> Option<VoteType> {
        self.0
            .iter()
            .find(|record| record.user_id == user_id)
            .map(|record| record.vote_type)
    }

    /// Appends a vote for a user who has none.
    pub(crate) fn add(&mut self, user_id: i32, vote_type: VoteType) {
        debug_assert!(self.vote_of(user_id).is_none());
        self.0.push(VoteRecord { user_id, vote_type });
    }

    /// Removes the vote of `user_id`, keeping the order of the others.
    pub(crate) fn remove(&mut self, user_id: i32) {
        self.0.retain(|record| record.user_id != user_id);
    }

    /// Changes the direction of an existing vote in place.
    pub(crate) fn switch(&mut self, user_id: i32, vote_type: VoteType) {
        if let Some(record) = self.0.iter_mut().find(|record| record.user_id == user_id) {
            record.vote_type = vote_type;
        }
    }

    pub fn records(&self) -> &[VoteRecord] {
        &self.0
    }
}

#[cfg(test)]
impl VoteLedger {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of records with the given direction.
    pub fn count(&self, vote_type: VoteType) -> usize {
        self.0
            .iter()
            .filter(|record| record.vote_type == vote_type)
            .count()
    }
}

/// Everything the voting subsystem owns on a review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub up_votes: i32,
    pub down_votes: i32,
    pub score: i32,
    pub voters: VoteLedger,
}

/// What the caller's own vote on a review looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserVoteDetails {
    pub is_voted: bool,
    pub is_up_voted: bool,
    pub is_down_voted: bool,
}

impl UserVoteDetails {
    /// Derives the details from the ledger for an optional caller.
    ///
    /// Without a caller every flag is `false`.
    pub fn for_caller(ledger: &VoteLedger, caller: Option<i32>) -> Self {
        let Some(vote) = caller.and_then(|user_id| ledger.vote_of(user_id)) else {
            return Self::default();
        };

        Self {
            is_voted: true,
            is_up_voted: vote == VoteType::Up,
            is_down_voted: vote == VoteType::Down,
        }
    }
}

/// Parameters for casting a vote.
#[derive(Debug, Clone, Copy)]
pub struct VoteParam {
    pub vote_type: VoteType,
    pub review_id: i32,
    pub user_id: i32,
}
