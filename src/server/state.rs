//! Shared state handed to the axum handlers.

use sea_orm::DatabaseConnection;

use crate::server::schema::AppSchema;

/// Cloned into every request; both fields are handles onto shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Used to resolve the caller before the schema executes.
    pub db: DatabaseConnection,

    /// Executable GraphQL schema.
    ///
    /// Built once at startup; resolvers receive the database connection through
    /// the schema data rather than this struct.
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(db: DatabaseConnection, schema: AppSchema) -> Self {
        Self { db, schema }
    }
}
