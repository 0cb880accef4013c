use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform a game was released on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Pc,
    Ps4,
    Ps5,
    Xbox,
    #[serde(rename = "XBOX360")]
    Xbox360,
    #[serde(rename = "XBOXONE")]
    XboxOne,
    Nintendo,
    Switch,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
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

/// JSON column holding the platforms of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Platforms(pub Vec<Platform>);

/// JSON column holding the genres of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<Genre>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub platform: Platforms,
    pub released_year: i32,
    pub cover_image: String,
    pub genre: Genres,
    pub release_date: DateTimeUtc,
    pub manufacturer_name: String,
    pub developer: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
