//! User domain models and parameters.

use chrono::{DateTime, Utc};

pub use entity::user::Role;

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped; use `UserCredentials` where it is needed.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A user together with the stored password hash, used only during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub user_name: String,
    pub email: String,
    /// Plain-text password as submitted; hashed before it reaches the repository.
    pub password: String,
}

/// Parameters for logging in.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for changing the role of the user with the given email.
#[derive(Debug, Clone)]
pub struct ChangeRoleParam {
    pub email: String,
    pub role: Role,
}
