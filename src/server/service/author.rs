use sea_orm::DatabaseConnection;

use crate::server::{data::author::AuthorRepository, error::AppError, model::author::Author};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Author>, AppError> {
        Ok(AuthorRepository::new(self.db).get_all().await?)
    }

    /// Retrieves an author, failing with `NotFound` when missing.
    pub async fn get_by_id(&self, id: i32) -> Result<Author, AppError> {
        AuthorRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }
}
