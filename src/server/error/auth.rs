use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The caller is anonymous. Results in `UNAUTHENTICATED`.
    #[error("User not authenticated!")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Treated like an anonymous caller. Results in `UNAUTHENTICATED`.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The caller is authenticated but lacks the required role.
    ///
    /// The string describes the attempted action for server-side logs only.
    /// Results in `FORBIDDEN`.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The caller tried to modify a resource owned by someone else.
    #[error("User {user_id} does not own review {review_id}")]
    NotReviewAuthor {
        /// The caller
        user_id: i32,
        /// The review they attempted to change
        review_id: i32,
    },

    /// Login attempted with an email that has no account.
    #[error("Email not registered!")]
    EmailNotRegistered,

    /// Login attempted with the wrong password.
    #[error("Incorrect password!")]
    IncorrectPassword,
}

impl AuthError {
    /// Machine readable code placed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "UNAUTHENTICATED",
            Self::AccessDenied(..) | Self::NotReviewAuthor { .. } => "FORBIDDEN",
            Self::EmailNotRegistered => "NOT_FOUND",
            Self::IncorrectPassword => "BAD_REQUEST",
        }
    }

    /// Client-facing message.
    ///
    /// Denials collapse to a generic message so user ids and internal reasons
    /// only appear in logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                "User not authenticated!".to_string()
            }
            Self::AccessDenied(..) | Self::NotReviewAuthor { .. } => {
                "You do not have authorization!".to_string()
            }
            err => err.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => StatusCode::UNAUTHORIZED,
            Self::AccessDenied(..) | Self::NotReviewAuthor { .. } => StatusCode::FORBIDDEN,
            Self::EmailNotRegistered => StatusCode::NOT_FOUND,
            Self::IncorrectPassword => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}
