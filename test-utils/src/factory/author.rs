//! Author factory for creating test author entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    verified: bool,
}

impl<'a> AuthorFactory<'a> {
    /// Defaults to an unverified author named `"Author {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Author {}", next_id()),
            verified: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            name: ActiveValue::Set(self.name),
            verified: ActiveValue::Set(self.verified),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
