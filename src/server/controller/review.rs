//! Review resolvers, including voting.

use async_graphql::{Context, Enum, InputObject, Object, SimpleObject, ID};
use chrono::{DateTime, Utc};

use super::{caller, db, game::GameObject, user::UserObject};
use crate::server::{
    error::GraphQlResultExt,
    model::{
        review::{CreateReviewParam, Review, UpdateReviewParam},
        vote::{UserVoteDetails, VoteParam, VoteRecord, VoteType},
    },
    service::{
        game::GameService, review::ReviewService, user::UserService, vote::VotingService,
    },
    util::parse::parse_id,
};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "VoteType", remote = "entity::review::VoteType")]
pub enum VoteTypeGql {
    Up,
    Down,
}

#[derive(InputObject)]
pub struct NewReviewInput {
    pub title: Option<String>,
    pub rating: f64,
    pub content: String,
}

#[derive(InputObject)]
pub struct UpdateReviewInput {
    pub rating: Option<f64>,
    pub content: Option<String>,
}

pub struct ReviewVoterObject(VoteRecord);

#[Object(name = "ReviewVoter")]
impl ReviewVoterObject {
    async fn user_id(&self) -> ID {
        ID::from(self.0.user_id)
    }

    async fn vote_type(&self) -> VoteTypeGql {
        self.0.vote_type.into()
    }
}

#[derive(SimpleObject)]
#[graphql(name = "UserVoteDetails")]
pub struct UserVoteDetailsObject {
    pub is_voted: bool,
    pub is_up_voted: bool,
    pub is_down_voted: bool,
}

impl From<UserVoteDetails> for UserVoteDetailsObject {
    fn from(details: UserVoteDetails) -> Self {
        Self {
            is_voted: details.is_voted,
            is_up_voted: details.is_up_voted,
            is_down_voted: details.is_down_voted,
        }
    }
}

pub struct ReviewObject(pub Review);

#[Object(name = "Review")]
impl ReviewObject {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn rating(&self) -> f64 {
        self.0.rating
    }

    async fn up_votes(&self) -> i32 {
        self.0.tally.up_votes
    }

    async fn down_votes(&self) -> i32 {
        self.0.tally.down_votes
    }

    async fn score(&self) -> i32 {
        self.0.tally.score
    }

    async fn voters(&self) -> Vec<ReviewVoterObject> {
        self.0
            .tally
            .voters
            .records()
            .iter()
            .copied()
            .map(ReviewVoterObject)
            .collect()
    }

    /// How the caller voted on this review. All flags are false for anonymous callers.
    async fn user_vote_details(&self, ctx: &Context<'_>) -> UserVoteDetailsObject {
        self.0.vote_details(caller(ctx).user_id()).into()
    }

    async fn game(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<GameObject>> {
        let game = GameService::new(db(ctx)?)
            .find_by_id(self.0.game_id)
            .await
            .into_graphql()?;

        Ok(game.map(GameObject))
    }

    /// Author of the review.
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<UserObject>> {
        let user = UserService::new(db(ctx)?)
            .get_user(self.0.user_id)
            .await
            .into_graphql()?;

        Ok(user.map(UserObject))
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }
}

#[derive(Default)]
pub struct ReviewQuery;

#[Object]
impl ReviewQuery {
    /// All reviews, best scored first.
    async fn reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ReviewObject>> {
        let reviews = ReviewService::new(db(ctx)?)
            .get_all_ranked()
            .await
            .into_graphql()?;

        Ok(reviews.into_iter().map(ReviewObject).collect())
    }

    async fn review_by_id(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<ReviewObject> {
        let id = parse_id(&id, "review").into_graphql()?;
        let review = ReviewService::new(db(ctx)?)
            .get_by_id(id)
            .await
            .into_graphql()?;

        Ok(ReviewObject(review))
    }

    /// Reviews written by the caller.
    async fn get_reviews_by_user(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<ReviewObject>> {
        let user = caller(ctx).require(&[]).into_graphql()?;

        let reviews = ReviewService::new(db(ctx)?)
            .get_by_user(user.id)
            .await
            .into_graphql()?;

        Ok(reviews.into_iter().map(ReviewObject).collect())
    }
}

#[derive(Default)]
pub struct ReviewMutation;

impl ReviewMutation {
    async fn vote(
        &self,
        ctx: &Context<'_>,
        review_id: &ID,
        vote_type: VoteType,
    ) -> async_graphql::Result<bool> {
        let user = caller(ctx).require(&[]).into_graphql()?;
        let review_id = parse_id(review_id, "review").into_graphql()?;

        VotingService::new(db(ctx)?)
            .vote(VoteParam {
                vote_type,
                review_id,
                user_id: user.id,
            })
            .await
            .into_graphql()
    }
}

#[Object]
impl ReviewMutation {
    async fn add_review(
        &self,
        ctx: &Context<'_>,
        game_id: ID,
        review: NewReviewInput,
    ) -> async_graphql::Result<ReviewObject> {
        let user = caller(ctx).require(&[]).into_graphql()?;
        let game_id = parse_id(&game_id, "game").into_graphql()?;

        let review = ReviewService::new(db(ctx)?)
            .create(CreateReviewParam {
                game_id,
                user_id: user.id,
                title: review.title,
                content: review.content,
                rating: review.rating,
            })
            .await
            .into_graphql()?;

        Ok(ReviewObject(review))
    }

    /// Edits content or rating. Only the review's author may do this.
    async fn update_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
        review: UpdateReviewInput,
    ) -> async_graphql::Result<ReviewObject> {
        let user = caller(ctx).require(&[]).into_graphql()?;
        let id = parse_id(&id, "review").into_graphql()?;

        let review = ReviewService::new(db(ctx)?)
            .update(
                user.id,
                UpdateReviewParam {
                    id,
                    content: review.content,
                    rating: review.rating,
                },
            )
            .await
            .into_graphql()?;

        Ok(ReviewObject(review))
    }

    /// Up votes a review, or withdraws the caller's up vote if already cast.
    async fn up_vote_review(&self, ctx: &Context<'_>, review_id: ID) -> async_graphql::Result<bool> {
        self.vote(ctx, &review_id, VoteType::Up).await
    }

    /// Down votes a review, or withdraws the caller's down vote if already cast.
    async fn down_vote_review(
        &self,
        ctx: &Context<'_>,
        review_id: ID,
    ) -> async_graphql::Result<bool> {
        self.vote(ctx, &review_id, VoteType::Down).await
    }
}
