use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which tables a test needs before the database is created.
///
/// Tables are generated from the SeaORM entities, so they match what the server
/// reads and writes without running the migration crate.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(entity::prelude::User)
///     .build()
///     .await?;
/// let db = test.db();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a CREATE TABLE statement for `entity`.
    ///
    /// Tables referenced by foreign keys must be queued first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every catalog table in foreign key order.
    ///
    /// Anything touching reviews needs this, since a review references both a
    /// game and the user who wrote it.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Author)
            .with_table(Game)
            .with_table(Review)
    }

    /// Opens the in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables created
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::connect().await?;

        context.create_tables(self.tables).await?;

        Ok(context)
    }
}
