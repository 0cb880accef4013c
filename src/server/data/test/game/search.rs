use super::*;

/// Tests the default catalog order.
///
/// Verifies that without criteria every game is returned, newest release first.
///
/// Expected: Ok with games sorted by released year descending
#[tokio::test]
async fn defaults_to_newest_release_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    GameFactory::new(db).released_year(2015).build().await?;
    GameFactory::new(db).released_year(2023).build().await?;
    GameFactory::new(db).released_year(2019).build().await?;

    let repo = GameRepository::new(db);
    let years: Vec<i32> = repo
        .search(&GameFilter::default())
        .await?
        .into_iter()
        .map(|game| game.released_year)
        .collect();

    assert_eq!(years, vec![2023, 2019, 2015]);

    Ok(())
}

/// Tests searching by title.
///
/// Verifies that the search term matches any part of the title regardless of case.
///
/// Expected: Ok with only matching titles
#[tokio::test]
async fn matches_title_substring_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    GameFactory::new(db).title("The Witcher 3").build().await?;
    GameFactory::new(db).title("Hollow Knight").build().await?;

    let repo = GameRepository::new(db);
    let games = repo
        .search(&GameFilter {
            search: Some("witch".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "The Witcher 3");

    Ok(())
}

/// Tests filtering by platform, genre and year range together.
///
/// Verifies that a game matches a list when it has any of the listed values and
/// that the year range is inclusive.
///
/// Expected: Ok with only games passing every criterion
#[tokio::test]
async fn combines_tag_and_year_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    GameFactory::new(db)
        .title("Match")
        .platform(vec![Platform::Pc, Platform::Ps5])
        .genre(vec![Genre::Rpg])
        .released_year(2020)
        .build()
        .await?;
    GameFactory::new(db)
        .title("Wrong platform")
        .platform(vec![Platform::Switch])
        .genre(vec![Genre::Rpg])
        .released_year(2020)
        .build()
        .await?;
    GameFactory::new(db)
        .title("Too old")
        .platform(vec![Platform::Pc])
        .genre(vec![Genre::Rpg])
        .released_year(2010)
        .build()
        .await?;
    GameFactory::new(db)
        .title("Wrong genre")
        .platform(vec![Platform::Pc])
        .genre(vec![Genre::Sports])
        .released_year(2021)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo
        .search(&GameFilter {
            platform: vec![Platform::Pc, Platform::Xbox],
            genre: vec![Genre::Rpg, Genre::Horror],
            year_range: Some((2018, 2021)),
            ..Default::default()
        })
        .await?;

    let titles: Vec<&str> = games.iter().map(|game| game.title.as_str()).collect();
    assert_eq!(titles, vec!["Match"]);

    Ok(())
}

/// Tests sorting by title ascending.
///
/// Expected: Ok with titles in alphabetical order
#[tokio::test]
async fn sorts_by_title_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    GameFactory::new(db).title("Celeste").build().await?;
    GameFactory::new(db).title("Anno 1800").build().await?;
    GameFactory::new(db).title("Bloodborne").build().await?;

    let repo = GameRepository::new(db);
    let games = repo
        .search(&GameFilter {
            sort_by: GameSortBy::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        })
        .await?;

    let titles: Vec<&str> = games.iter().map(|game| game.title.as_str()).collect();
    assert_eq!(titles, vec!["Anno 1800", "Bloodborne", "Celeste"]);

    Ok(())
}

/// Tests that the search term is matched literally.
///
/// Verifies that `%` and `_` are ordinary characters rather than wildcards.
///
/// Expected: Ok with only titles containing the literal character
#[tokio::test]
async fn treats_wildcard_characters_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    GameFactory::new(db).title("100% Orange Juice").build().await?;
    GameFactory::new(db).title("Hollow Knight").build().await?;

    let repo = GameRepository::new(db);
    let by_percent = repo
        .search(&GameFilter {
            search: Some("%".to_string()),
            ..Default::default()
        })
        .await?;
    let by_underscore = repo
        .search(&GameFilter {
            search: Some("_".to_string()),
            ..Default::default()
        })
        .await?;

    let titles: Vec<&str> = by_percent.iter().map(|game| game.title.as_str()).collect();
    assert_eq!(titles, vec!["100% Orange Juice"]);
    assert!(by_underscore.is_empty());

    Ok(())
}

/// Tests case folding beyond ASCII.
///
/// Expected: Ok with the accented title matched in either case
#[tokio::test]
async fn folds_case_of_non_ascii_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db();
    GameFactory::new(db).title("Ōkami HD").build().await?;
    GameFactory::new(db).title("Hollow Knight").build().await?;

    let repo = GameRepository::new(db);
    for term in ["ōkami", "ŌKAMI"] {
        let games = repo
            .search(&GameFilter {
                search: Some(term.to_string()),
                ..Default::default()
            })
            .await?;

        let titles: Vec<&str> = games.iter().map(|game| game.title.as_str()).collect();
        assert_eq!(titles, vec!["Ōkami HD"], "term {term}");
    }

    Ok(())
}
