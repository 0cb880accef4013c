use super::*;
use test_utils::factory::review::ReviewFactory;

/// Tests the ranking of all reviews.
///
/// Verifies that reviews are ordered by score, with up votes breaking ties.
///
/// Expected: Ok with reviews in ranked order
#[tokio::test]
async fn orders_by_score_then_up_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let low = ReviewFactory::new(db, game.id, user.id)
        .votes(0, 1, -1, Vec::new())
        .build()
        .await?;
    let tied_fewer_up = ReviewFactory::new(db, game.id, user.id)
        .votes(1, 1, 1, Vec::new())
        .build()
        .await?;
    let tied_more_up = ReviewFactory::new(db, game.id, user.id)
        .votes(2, 3, 1, Vec::new())
        .build()
        .await?;
    let top = ReviewFactory::new(db, game.id, user.id)
        .votes(1, 0, 2, Vec::new())
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let ids: Vec<i32> = repo
        .get_all_ranked()
        .await?
        .into_iter()
        .map(|review| review.id)
        .collect();

    assert_eq!(ids, vec![top.id, tied_more_up.id, tied_fewer_up.id, low.id]);

    Ok(())
}
