//! Error types and response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into GraphQL errors and HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Every variant maps to a
//! stable `extensions.code` so clients can branch on it without parsing messages.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use async_graphql::ErrorExtensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError, internal::InternalError};

/// JSON body returned for failures outside GraphQL execution.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. Domain-specific errors like `AuthError`
/// carry their own code mapping, while generic variants provide standard codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError` for code and message mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Surfaces as `INTERNAL_SERVER_ERROR` with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    ///
    /// Surfaces as `INTERNAL_SERVER_ERROR` as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Unexpected internal condition.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Socket or filesystem error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Concurrent writers kept invalidating the state this request was based on.
    ///
    /// # Fields
    /// - Message describing the contended resource
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Machine readable code placed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthErr(err) => err.code(),
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Internal variants are logged here and replaced with a generic message.
    fn client_message(&self) -> String {
        match self {
            Self::AuthErr(err) => {
                tracing::warn!("Rejected request: {}", err);
                err.client_message()
            }
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Conflict(msg) => msg.clone(),
            err => {
                tracing::error!("Internal error: {}", err);
                "Internal server error".to_string()
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self.code() {
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "BAD_REQUEST" => StatusCode::BAD_REQUEST,
            "CONFLICT" => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into GraphQL errors.
///
/// The message is the client-safe message and `extensions.code` carries the
/// category, mirroring what the resolvers report for every failure path.
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.client_message())
            .extend_with(|_, ext| ext.set("code", code.to_string()))
    }
}

/// Resolver helper turning service results into GraphQL results.
///
/// `async_graphql::Error` already has a blanket `From` for every `Display` type, so
/// `?` alone would drop the extension code. Resolvers call `.into_graphql()` instead.
pub trait GraphQlResultExt<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> GraphQlResultExt<T> for Result<T, AppError> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|err| err.extend())
    }
}

/// Converts application errors into HTTP responses.
///
/// Used for failures that happen before a GraphQL request is executed, such as
/// resolving the caller from the session.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err => {
                let status = err.status();
                (
                    status,
                    Json(ErrorDto {
                        error: err.client_message(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
