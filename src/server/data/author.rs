use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::author::Author;

pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all authors ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Author>, DbErr> {
        let entities = entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Author::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Author::from_entity))
    }
}
