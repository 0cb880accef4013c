use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment backed by an in-memory SQLite database.
///
/// The database is connected when the context is built. The session is created on
/// first use and stored in the same database, mirroring how the server stores its
/// sessions next to the application tables.
pub struct TestContext {
    db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    /// Connects to a fresh in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database
    /// - `Err(TestError::Database)` - Failed to open the in-memory database
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db, session: None })
    }

    /// Database connection of this context.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Executes CREATE TABLE statements in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements generated by `TestBuilder`
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn create_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets the test session, creating the session table on first call.
    ///
    /// `Session` is a cheap handle, so the returned value shares state with every
    /// other handle obtained from this context.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().build().await?;
    /// let session = test.session().await?;
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<Session, TestError> {
        if let Some(session) = &self.session {
            return Ok(session.clone());
        }

        let store = SqliteStore::new(self.db.get_sqlite_connection_pool().clone());
        store
            .migrate()
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        let session = Session::new(
            None,
            Arc::new(store),
            Some(Expiry::OnInactivity(Duration::days(7))),
        );
        self.session = Some(session.clone());

        Ok(session)
    }

    /// Gets the database connection together with the session.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, Session), TestError> {
        let session = self.session().await?;

        Ok((&self.db, session))
    }
}
