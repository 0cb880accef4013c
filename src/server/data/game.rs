//! Game data repository for catalog queries and edits.

use chrono::Utc;
use entity::game::{Genres, Platforms};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::game::{
    CreateGameParam, Game, GameFilter, GameSortBy, SortOrder, UpdateGameParam,
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game.
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let now = Utc::now();
        let entity = entity::game::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            platform: ActiveValue::Set(Platforms(param.platform)),
            released_year: ActiveValue::Set(param.released_year),
            cover_image: ActiveValue::Set(param.cover_image),
            genre: ActiveValue::Set(Genres(param.genre)),
            release_date: ActiveValue::Set(param.release_date),
            manufacturer_name: ActiveValue::Set(param.manufacturer_name),
            developer: ActiveValue::Set(param.developer),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets every game in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Searches the catalog.
    ///
    /// Release year is filtered in SQL. The title substring and the JSON platform and
    /// genre columns are matched after loading, preserving the SQL ordering.
    ///
    /// # Arguments
    /// - `filter` - Search criteria and sort order
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Matching games, sorted
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, filter: &GameFilter) -> Result<Vec<Game>, DbErr> {
        let mut query = entity::prelude::Game::find();

        if let Some((min, max)) = filter.year_range {
            query = query.filter(entity::game::Column::ReleasedYear.between(min, max));
        }

        let column = match filter.sort_by {
            GameSortBy::Title => entity::game::Column::Title,
            GameSortBy::ReleasedYear => entity::game::Column::ReleasedYear,
        };
        query = match filter.sort_order {
            SortOrder::Asc => query.order_by_asc(column),
            SortOrder::Desc => query.order_by_desc(column),
        };

        let entities = query
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Game::from_entity)
            .filter(|game| filter.matches_title(game) && filter.matches_tags(game))
            .collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Updated game
    /// - `Ok(None)` - No game with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateGameParam) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::game::ActiveModel = entity.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(platform) = param.platform {
            active.platform = ActiveValue::Set(Platforms(platform));
        }
        if let Some(released_year) = param.released_year {
            active.released_year = ActiveValue::Set(released_year);
        }
        if let Some(genre) = param.genre {
            active.genre = ActiveValue::Set(Genres(genre));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Game::from_entity(updated)))
    }

    /// Deletes a game.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
