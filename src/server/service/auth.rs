//! Account registration and login.
//!
//! Password checks live here; storing the logged-in user in the session is left to
//! the resolvers since the service layer does not see the request.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterUserParam, Role, User},
    util::password::{hash_password, verify_password},
};

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The first account ever registered becomes `SUPER_ADMIN` so the catalog can be
    /// administered without manual database edits. Every later account is `USER`.
    ///
    /// # Arguments
    /// - `param` - User name, email and plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Empty fields, short password, or email or user
    ///   name already in use
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_name = param.user_name.trim().to_string();
        let email = param.email.trim().to_string();

        if user_name.is_empty() || email.is_empty() {
            return Err(AppError::BadRequest(
                "Username and email are required!".to_string(),
            ));
        }
        if param.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long!",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered!".to_string(),
            ));
        }
        if user_repo.find_by_user_name(&user_name).await?.is_some() {
            return Err(AppError::BadRequest("Username is already taken!".to_string()));
        }

        let role = if user_repo.count().await? == 0 {
            Role::SuperAdmin
        } else {
            Role::User
        };

        let user = user_repo
            .create(CreateUserParam {
                user_name,
                email,
                password_hash: hash_password(&param.password)?,
                role,
            })
            .await?;

        tracing::info!(user_id = user.id, role = ?user.role, "Registered new user");

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(EmailNotRegistered))` - No account with that email
    /// - `Err(AppError::AuthErr(IncorrectPassword))` - Password does not match
    /// - `Err(AppError::Internal)` - Stored hash is malformed
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo
            .find_credentials_by_email(param.email.trim())
            .await?
        else {
            return Err(AuthError::EmailNotRegistered.into());
        };

        if !verify_password(
            credentials.user.id,
            &param.password,
            &credentials.password_hash,
        )? {
            return Err(AuthError::IncorrectPassword.into());
        }

        Ok(credentials.user)
    }
}
