use crate::server::{
    data::game::GameRepository,
    model::game::{GameFilter, GameSortBy, Genre, Platform, SortOrder, UpdateGameParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::game::GameFactory};

mod delete;
mod search;
mod update;
