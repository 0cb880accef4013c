use super::*;

fn tally_with_up_vote(user_id: i32) -> VoteTally {
    let mut tally = VoteTally {
        up_votes: 1,
        down_votes: 0,
        score: 2,
        ..Default::default()
    };
    tally.voters.add(user_id, VoteType::Up);
    tally
}

/// Tests saving votes at the current version.
///
/// Verifies that counters, score and voters are written together and the version
/// is incremented.
///
/// Expected: Ok(true) and the new state persisted
#[tokio::test]
async fn saves_votes_at_current_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let (user, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let tally = tally_with_up_vote(user.id);
    let saved = repo.save_votes(review.id, review.version, &tally).await?;

    assert!(saved);

    let stored = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(stored.tally, tally);
    assert_eq!(stored.version, review.version + 1);

    Ok(())
}

/// Tests saving votes with a stale version.
///
/// Verifies that a write computed from an outdated read is rejected and the row
/// is left unchanged.
///
/// Expected: Ok(false) and no change
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let (user, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    assert!(
        repo.save_votes(review.id, review.version, &tally_with_up_vote(user.id))
            .await?
    );
    let before = repo.find_by_id(review.id).await?.unwrap();

    // Second writer still holds the original version
    let saved = repo
        .save_votes(review.id, review.version, &VoteTally::default())
        .await?;

    assert!(!saved);
    let after = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(after.tally, before.tally);
    assert_eq!(after.version, before.version);

    Ok(())
}

/// Tests saving votes for a review that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();

    let repo = ReviewRepository::new(db);
    let saved = repo.save_votes(42, 0, &tally_with_up_vote(1)).await?;

    assert!(!saved);

    Ok(())
}
