use crate::server::{
    data::review::ReviewRepository,
    model::{
        review::{CreateReviewParam, UpdateReviewParam},
        vote::{VoteTally, VoteType},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_ranked;
mod save_votes;
mod update_payload;
