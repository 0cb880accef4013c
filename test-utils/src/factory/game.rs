//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::{TimeZone, Utc};
use entity::game::{Genre, Genres, Platform, Platforms};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = GameFactory::new(&db)
///     .title("Elden Ring")
///     .released_year(2022)
///     .platform(vec![Platform::Pc, Platform::Ps5])
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    platform: Vec<Platform>,
    genre: Vec<Genre>,
    released_year: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"`
    /// - platform: `[PC]`
    /// - genre: `[ACTION]`
    /// - released_year: `2020`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Game {}", next_id()),
            platform: vec![Platform::Pc],
            genre: vec![Genre::Action],
            released_year: 2020,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn platform(mut self, platform: Vec<Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn genre(mut self, genre: Vec<Genre>) -> Self {
        self.genre = genre;
        self
    }

    pub fn released_year(mut self, released_year: i32) -> Self {
        self.released_year = released_year;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// The release date is set to January 1st of the configured release year.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        let release_date = Utc
            .with_ymd_and_hms(self.released_year, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(now);

        entity::game::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("A game used in tests".to_string()),
            platform: ActiveValue::Set(Platforms(self.platform)),
            released_year: ActiveValue::Set(self.released_year),
            cover_image: ActiveValue::Set("https://example.com/cover.png".to_string()),
            genre: ActiveValue::Set(Genres(self.genre)),
            release_date: ActiveValue::Set(release_date),
            manufacturer_name: ActiveValue::Set("Test Manufacturer".to_string()),
            developer: ActiveValue::Set("Test Developer".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
