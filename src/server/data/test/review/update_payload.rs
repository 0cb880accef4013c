use super::*;
use entity::review::Voter;
use test_utils::factory::review::ReviewFactory;

/// Tests editing a review that already carries votes.
///
/// Verifies that content and rating change while counters, voters and version
/// stay as they were.
///
/// Expected: Ok(Some) with vote state untouched
#[tokio::test]
async fn updates_payload_without_touching_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let author = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let review = ReviewFactory::new(db, game.id, author.id)
        .votes(
            0,
            1,
            -1,
            vec![Voter {
                user_id: voter.id,
                vote_type: VoteType::Down,
            }],
        )
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update_payload(UpdateReviewParam {
            id: review.id,
            content: Some("Changed my mind".to_string()),
            rating: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.content, "Changed my mind");
    assert_eq!(updated.rating, review.rating);
    assert_eq!(updated.tally.down_votes, 1);
    assert_eq!(updated.tally.score, -1);
    assert_eq!(updated.tally.voters.vote_of(voter.id), Some(VoteType::Down));
    assert_eq!(updated.version, review.version);

    Ok(())
}

/// Tests editing a review that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let repo = ReviewRepository::new(db);
    let result = repo
        .update_payload(UpdateReviewParam {
            id: 7,
            content: None,
            rating: Some(3.0),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
