use super::*;

/// Tests a partial game update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some) with updated title and untouched year
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let game = GameFactory::new(db)
        .title("Old title")
        .released_year(2018)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(UpdateGameParam {
            id: game.id,
            title: Some("New title".to_string()),
            genre: Some(vec![Genre::Puzzle]),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.genre, vec![Genre::Puzzle]);
    assert_eq!(updated.released_year, 2018);
    assert_eq!(updated.platform, game.platform.0);

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GameRepository::new(db);
    let result = repo
        .update(UpdateGameParam {
            id: 12,
            title: Some("Nothing".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
