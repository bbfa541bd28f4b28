use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{GuildConfig, StreamWatch};
///
/// let test = TestBuilder::new()
///     .with_table(GuildConfig)
///     .with_table(StreamWatch)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether `build()` runs the real migrations after creating the tables above.
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrate: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Creates the schema through the application's migrations.
    ///
    /// Entity-derived tables carry no composite indexes, so tests that rely on the
    /// store rejecting a duplicate `(guild_id, login)` stream watch need this
    /// instead of `with_table`.
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Adds every table the bot uses: guild configuration, stream watches and the
    /// audit log, created through the migrations.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_bot_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_bot_tables(self) -> Self {
        self.with_migrations()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.migrate {
            Migrator::up(setup.database().await?, None).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
