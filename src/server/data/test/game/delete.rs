use super::*;

/// Tests deleting a game.
///
/// Expected: Ok(true) and the game is gone
#[tokio::test]
async fn deletes_existing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let game = GameFactory::new(db).build().await?;

    let repo = GameRepository::new(db);
    let deleted = repo.delete(game.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(game.id).await?.is_none());

    Ok(())
}

/// Tests deleting a game that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GameRepository::new(db);

    assert!(!repo.delete(3).await?);

    Ok(())
}
