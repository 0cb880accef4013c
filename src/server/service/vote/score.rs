//! Vote transition rules.
//!
//! Maps the caller's existing vote and the requested direction to a ledger action
//! and counter deltas. The score weights are asymmetric: an up vote is worth `+2`,
//! a down vote `-1`, and every reversal is the exact inverse of the original action.

use crate::server::model::vote::{VoteTally, VoteType};

/// How the voter list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    /// First vote of this user on the review.
    Add,
    /// Same direction again; the vote is withdrawn.
    Remove,
    /// Opposite direction; the record flips in place.
    Switch,
}

/// Outcome of one vote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub action: LedgerAction,
    pub up_delta: i32,
    pub down_delta: i32,
    pub score_delta: i32,
}

impl VoteTransition {
    const fn new(action: LedgerAction, up_delta: i32, down_delta: i32, score_delta: i32) -> Self {
        Self {
            action,
            up_delta,
            down_delta,
            score_delta,
        }
    }
}

/// Computes the transition for a vote request.
///
/// # Arguments
/// - `existing` - The caller's current vote on the review, if any
/// - `requested` - Direction of the new request
pub fn transition(existing: Option<VoteType>, requested: VoteType) -> VoteTransition {
    use LedgerAction::*;
    use VoteType::{Down, Up};

    match (existing, requested) {
        (None, Up) => VoteTransition::new(Add, 1, 0, 2),
        (None, Down) => VoteTransition::new(Add, 0, 1, -1),
        (Some(Up), Up) => VoteTransition::new(Remove, -1, 0, -2),
        (Some(Down), Down) => VoteTransition::new(Remove, 0, -1, 1),
        (Some(Up), Down) => VoteTransition::new(Switch, -1, 1, -3),
        (Some(Down), Up) => VoteTransition::new(Switch, 1, -1, 3),
    }
}

/// Applies a vote request to a tally in memory.
///
/// The ledger is updated according to the transition and the counters and score
/// move by its deltas. Counters never drop below zero even if the stored tally was
/// already out of step with the ledger.
///
/// # Arguments
/// - `tally` - Vote state read from the review
/// - `user_id` - The voter
/// - `requested` - Direction of the request
///
/// # Returns
/// The transition that was applied
pub fn apply(tally: &mut VoteTally, user_id: i32, requested: VoteType) -> VoteTransition {
    let transition = transition(tally.voters.vote_of(user_id), requested);

    match transition.action {
        LedgerAction::Add => tally.voters.add(user_id, requested),
        LedgerAction::Remove => tally.voters.remove(user_id),
        LedgerAction::Switch => tally.voters.switch(user_id, requested),
    }

    tally.up_votes = (tally.up_votes + transition.up_delta).max(0);
    tally.down_votes = (tally.down_votes + transition.down_delta).max(0);
    tally.score += transition.score_delta;

    transition
}
