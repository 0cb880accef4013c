use super::*;

/// Tests creating a review.
///
/// Verifies that a new review starts without votes and at version zero.
///
/// Expected: Ok with zeroed vote state
#[tokio::test]
async fn creates_review_with_zeroed_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParam {
            game_id: game.id,
            user_id: user.id,
            title: Some("Solid".to_string()),
            content: "Plays well".to_string(),
            rating: 8.5,
        })
        .await?;

    assert_eq!(review.game_id, game.id);
    assert_eq!(review.user_id, user.id);
    assert_eq!(review.title.as_deref(), Some("Solid"));
    assert_eq!(review.tally, VoteTally::default());
    assert_eq!(review.version, 0);

    Ok(())
}

/// Tests creating a review for a game that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParam {
            game_id: 999,
            user_id: user.id,
            title: None,
            content: "Ghost".to_string(),
            rating: 1.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
