//! User service for business logic.
//!
//! Looks users up for nested GraphQL fields and changes roles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{ChangeRoleParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }

    /// Changes the role of the user with the given email.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new role
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn change_role(&self, param: ChangeRoleParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo
            .set_role_by_email(param.email.trim(), param.role)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        tracing::info!(user_id = user.id, role = ?user.role, "Changed user role");

        Ok(user)
    }
}
