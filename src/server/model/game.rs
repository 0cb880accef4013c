//! Game domain models, catalog filters and parameters.

use chrono::{DateTime, Utc};

pub use entity::game::{Genre, Platform};

use crate::server::error::AppError;

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub platform: Vec<Platform>,
    pub released_year: i32,
    pub cover_image: String,
    pub genre: Vec<Genre>,
    pub release_date: DateTime<Utc>,
    pub manufacturer_name: String,
    pub developer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            platform: entity.platform.0,
            released_year: entity.released_year,
            cover_image: entity.cover_image,
            genre: entity.genre.0,
            release_date: entity.release_date,
            manufacturer_name: entity.manufacturer_name,
            developer: entity.developer,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Column the catalog is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameSortBy {
    Title,
    #[default]
    ReleasedYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Catalog search criteria.
///
/// Empty `platform`/`genre` lists do not filter. A game matches a non-empty list
/// when it carries at least one of the listed values.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub search: Option<String>,
    pub platform: Vec<Platform>,
    pub genre: Vec<Genre>,
    /// Inclusive `(min, max)` release year bounds.
    pub year_range: Option<(i32, i32)>,
    pub sort_by: GameSortBy,
    pub sort_order: SortOrder,
}

impl GameFilter {
    /// Interprets the `yearRange` argument.
    ///
    /// `[]` means no bound, `[y]` means exactly `y` and `[min, max]` is inclusive.
    ///
    /// # Returns
    /// - `Ok(None)` - No year filtering requested
    /// - `Ok(Some((min, max)))` - Inclusive bounds
    /// - `Err(AppError::BadRequest)` - More than two values, or `min > max`
    pub fn year_bounds(year_range: &[i32]) -> Result<Option<(i32, i32)>, AppError> {
        let bounds = match year_range {
            [] => return Ok(None),
            [year] => (*year, *year),
            [min, max] => (*min, *max),
            _ => {
                return Err(AppError::BadRequest(
                    "yearRange accepts at most two values".to_string(),
                ))
            }
        };

        if bounds.0 > bounds.1 {
            return Err(AppError::BadRequest(
                "yearRange minimum is greater than maximum".to_string(),
            ));
        }

        Ok(Some(bounds))
    }

    /// Case-insensitive literal substring match of `search` against the title.
    ///
    /// Done outside SQL since `LIKE` treats `%` and `_` as wildcards and only folds
    /// ASCII case.
    pub fn matches_title(&self, game: &Game) -> bool {
        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(search) => game.title.to_lowercase().contains(&search.to_lowercase()),
            None => true,
        }
    }

    /// Checks the list-valued criteria that cannot be expressed on JSON columns in SQL.
    pub fn matches_tags(&self, game: &Game) -> bool {
        let platform_ok =
            self.platform.is_empty() || game.platform.iter().any(|p| self.platform.contains(p));
        let genre_ok = self.genre.is_empty() || game.genre.iter().any(|g| self.genre.contains(g));

        platform_ok && genre_ok
    }
}

/// Parameters for adding a game to the catalog.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub title: String,
    pub description: String,
    pub platform: Vec<Platform>,
    pub released_year: i32,
    pub cover_image: String,
    pub genre: Vec<Genre>,
    pub release_date: DateTime<Utc>,
    pub manufacturer_name: String,
    pub developer: String,
}

/// Partial update of a game; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParam {
    pub id: i32,
    pub title: Option<String>,
    pub platform: Option<Vec<Platform>>,
    pub released_year: Option<i32>,
    pub genre: Option<Vec<Genre>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(platform: Vec<Platform>, genre: Vec<Genre>) -> Game {
        let now = Utc::now();
        Game {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            platform,
            released_year: 2020,
            cover_image: String::new(),
            genre,
            release_date: now,
            manufacturer_name: String::new(),
            developer: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn single_year_is_an_exact_bound() {
        assert_eq!(GameFilter::year_bounds(&[2019]).unwrap(), Some((2019, 2019)));
        assert_eq!(GameFilter::year_bounds(&[2010, 2020]).unwrap(), Some((2010, 2020)));
        assert_eq!(GameFilter::year_bounds(&[]).unwrap(), None);
    }

    #[test]
    fn rejects_malformed_year_ranges() {
        assert!(GameFilter::year_bounds(&[2020, 2010]).is_err());
        assert!(GameFilter::year_bounds(&[2010, 2015, 2020]).is_err());
    }

    #[test]
    fn tag_lists_match_on_any_overlap() {
        let game = game_with(vec![Platform::Pc, Platform::Ps5], vec![Genre::Rpg]);

        let filter = GameFilter {
            platform: vec![Platform::Switch, Platform::Ps5],
            ..Default::default()
        };
        assert!(filter.matches_tags(&game));

        let filter = GameFilter {
            genre: vec![Genre::Racing],
            ..Default::default()
        };
        assert!(!filter.matches_tags(&game));

        assert!(GameFilter::default().matches_tags(&game));
    }
}
