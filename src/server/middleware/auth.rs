//! Caller identity and permission checks.
//!
//! An `AuthContext` is resolved once per GraphQL request from the session and handed
//! to resolvers through the request data. Services receive the caller's id as a plain
//! parameter and never look at the session themselves.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Capabilities gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Add, edit and delete catalog games. Held by `ADMIN` and `SUPER_ADMIN`.
    ManageCatalog,
    /// Change the role of other users. Held by `SUPER_ADMIN` only.
    ManageRoles,
}

impl Permission {
    fn granted_to(self, role: Role) -> bool {
        match self {
            Self::ManageCatalog => matches!(role, Role::Admin | Role::SuperAdmin),
            Self::ManageRoles => role == Role::SuperAdmin,
        }
    }
}

/// Identity of the caller for the current request.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<User>,
}

impl AuthContext {
    /// Context of a caller without a session.
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Resolves the caller from the session.
    ///
    /// A session pointing at a user that no longer exists is treated as anonymous.
    ///
    /// # Arguments
    /// - `db` - Database connection used to load the user
    /// - `session` - Session of the current request
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Authenticated or anonymous context
    /// - `Err(AppError)` - Session store or database failure
    pub async fn from_session(db: &DatabaseConnection, session: &Session) -> Result<Self, AppError> {
        let Some(user_id) = AuthSession::new(session).get_user_id().await? else {
            return Ok(Self::anonymous());
        };

        match UserRepository::new(db).find_by_id(user_id).await? {
            Some(user) => Ok(Self::authenticated(user)),
            None => {
                tracing::debug!("{}", AuthError::UserNotInDatabase(user_id));
                Ok(Self::anonymous())
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Requires an authenticated caller holding every listed permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions to check; empty means any authenticated user
    ///
    /// # Returns
    /// - `Ok(&User)` - The caller
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Anonymous caller
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller lacks a permission
    pub fn require(&self, permissions: &[Permission]) -> Result<&User, AppError> {
        let Some(user) = self.user.as_ref() else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            if !permission.granted_to(user.role) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("missing {:?} permission as {:?}", permission, user.role),
                )
                .into());
            }
        }

        Ok(user)
    }
}
