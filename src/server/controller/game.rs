//! Game catalog resolvers.

use async_graphql::{Context, Enum, InputObject, Object, ID};
use chrono::{DateTime, TimeZone, Utc};

use super::{caller, db, review::ReviewObject};
use crate::server::{
    error::{AppError, GraphQlResultExt},
    middleware::auth::Permission,
    model::game::{CreateGameParam, Game, GameFilter, UpdateGameParam},
    service::{game::GameService, review::ReviewService},
    util::parse::parse_id,
};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "Platform", remote = "entity::game::Platform")]
pub enum PlatformGql {
    Pc,
    #[graphql(name = "PS4")]
    Ps4,
    #[graphql(name = "PS5")]
    Ps5,
    Xbox,
    #[graphql(name = "XBOX360")]
    Xbox360,
    #[graphql(name = "XBOXONE")]
    XboxOne,
    Nintendo,
    Switch,
    Mobile,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "Genre", remote = "entity::game::Genre")]
pub enum GenreGql {
    Action,
    Adventure,
    Rpg,
    Strategy,
    Simulation,
    Sports,
    Puzzle,
    Horror,
    Fps,
    Tps,
    OpenWorld,
    Multiplayer,
    Mmo,
    Card,
    Platformer,
    Fighting,
    Racing,
    Arcade,
    Survival,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "GameSortBy", remote = "crate::server::model::game::GameSortBy")]
pub enum GameSortByGql {
    #[graphql(name = "title")]
    Title,
    #[graphql(name = "releasedYear")]
    ReleasedYear,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "SortOrder", remote = "crate::server::model::game::SortOrder")]
pub enum SortOrderGql {
    Asc,
    Desc,
}

/// Fields of a new catalog entry. Everything after `genre` is optional.
#[derive(InputObject)]
pub struct NewGameInput {
    pub title: String,
    pub platform: Vec<PlatformGql>,
    pub released_year: i32,
    pub genre: Vec<GenreGql>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    /// Defaults to January 1st of `releasedYear`.
    pub release_date: Option<DateTime<Utc>>,
    pub manufacturer_name: Option<String>,
    pub developer: Option<String>,
}

impl NewGameInput {
    fn into_param(self) -> Result<CreateGameParam, AppError> {
        let release_date = match self.release_date {
            Some(date) => date,
            None => Utc
                .with_ymd_and_hms(self.released_year, 1, 1, 0, 0, 0)
                .single()
                .ok_or_else(|| {
                    AppError::BadRequest(format!("Invalid releasedYear {}", self.released_year))
                })?,
        };

        Ok(CreateGameParam {
            title: self.title,
            description: self.description.unwrap_or_default(),
            platform: self.platform.into_iter().map(Into::into).collect(),
            released_year: self.released_year,
            cover_image: self.cover_image.unwrap_or_default(),
            genre: self.genre.into_iter().map(Into::into).collect(),
            release_date,
            manufacturer_name: self.manufacturer_name.unwrap_or_default(),
            developer: self.developer.unwrap_or_default(),
        })
    }
}

#[derive(InputObject)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platform: Option<Vec<PlatformGql>>,
    pub released_year: Option<i32>,
    pub genre: Option<Vec<GenreGql>>,
}

pub struct GameObject(pub Game);

#[Object(name = "Game")]
impl GameObject {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn platform(&self) -> Vec<PlatformGql> {
        self.0.platform.iter().copied().map(Into::into).collect()
    }

    async fn released_year(&self) -> i32 {
        self.0.released_year
    }

    async fn cover_image(&self) -> &str {
        &self.0.cover_image
    }

    async fn genre(&self) -> Vec<GenreGql> {
        self.0.genre.iter().copied().map(Into::into).collect()
    }

    async fn release_date(&self) -> DateTime<Utc> {
        self.0.release_date
    }

    async fn manufacturer_name(&self) -> &str {
        &self.0.manufacturer_name
    }

    async fn developer(&self) -> &str {
        &self.0.developer
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    /// Reviews of this game, newest first.
    async fn reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ReviewObject>> {
        let reviews = ReviewService::new(db(ctx)?)
            .get_by_game(self.0.id)
            .await
            .into_graphql()?;

        Ok(reviews.into_iter().map(ReviewObject).collect())
    }

    /// Mean review rating rounded to two decimals; `0` without reviews.
    async fn average_rating(&self, ctx: &Context<'_>) -> async_graphql::Result<f64> {
        GameService::new(db(ctx)?)
            .average_rating(self.0.id)
            .await
            .into_graphql()
    }
}

#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    /// Searches the catalog.
    ///
    /// `yearRange` takes one year for an exact match or two for an inclusive range.
    /// Results default to newest release first.
    async fn get_all_games(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        platform: Option<Vec<PlatformGql>>,
        genre: Option<Vec<GenreGql>>,
        year_range: Option<Vec<i32>>,
        sort_by: Option<GameSortByGql>,
        sort_order: Option<SortOrderGql>,
    ) -> async_graphql::Result<Vec<GameObject>> {
        let filter = GameFilter {
            search,
            platform: platform
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            genre: genre.unwrap_or_default().into_iter().map(Into::into).collect(),
            year_range: GameFilter::year_bounds(&year_range.unwrap_or_default()).into_graphql()?,
            sort_by: sort_by.map(Into::into).unwrap_or_default(),
            sort_order: sort_order.map(Into::into).unwrap_or_default(),
        };

        let games = GameService::new(db(ctx)?)
            .search(filter)
            .await
            .into_graphql()?;

        Ok(games.into_iter().map(GameObject).collect())
    }

    async fn get_game_by_id(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<GameObject> {
        let id = parse_id(&id, "game").into_graphql()?;
        let game = GameService::new(db(ctx)?)
            .get_by_id(id)
            .await
            .into_graphql()?;

        Ok(GameObject(game))
    }
}

#[derive(Default)]
pub struct GameMutation;

#[Object]
impl GameMutation {
    async fn add_game(
        &self,
        ctx: &Context<'_>,
        new_game: NewGameInput,
    ) -> async_graphql::Result<GameObject> {
        caller(ctx)
            .require(&[Permission::ManageCatalog])
            .into_graphql()?;

        let param = new_game.into_param().into_graphql()?;
        let game = GameService::new(db(ctx)?)
            .create(param)
            .await
            .into_graphql()?;

        Ok(GameObject(game))
    }

    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edit_game: EditGameInput,
    ) -> async_graphql::Result<GameObject> {
        caller(ctx)
            .require(&[Permission::ManageCatalog])
            .into_graphql()?;

        let id = parse_id(&id, "game").into_graphql()?;
        let game = GameService::new(db(ctx)?)
            .update(UpdateGameParam {
                id,
                title: edit_game.title,
                platform: edit_game
                    .platform
                    .map(|p| p.into_iter().map(Into::into).collect()),
                released_year: edit_game.released_year,
                genre: edit_game
                    .genre
                    .map(|g| g.into_iter().map(Into::into).collect()),
            })
            .await
            .into_graphql()?;

        Ok(GameObject(game))
    }

    /// Deletes a game and its reviews, returning the remaining catalog.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Vec<GameObject>> {
        caller(ctx)
            .require(&[Permission::ManageCatalog])
            .into_graphql()?;

        let id = parse_id(&id, "game").into_graphql()?;
        let remaining = GameService::new(db(ctx)?)
            .delete(id)
            .await
            .into_graphql()?;

        Ok(remaining.into_iter().map(GameObject).collect())
    }
}
