use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_fantasy_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the player roster table.
    pub fn with_roster_tables(self) -> Self {
        self.with_table(Player)
    }

    /// Adds every table used by the fantasy game, roster included.
    ///
    /// Tables are added in dependency order:
    /// - Player
    /// - FantasyTeam
    /// - FantasySelection
    /// - FantasyGameweek
    /// - FantasyPlayerStat
    /// - FantasyState
    pub fn with_fantasy_tables(self) -> Self {
        self.with_roster_tables()
            .with_table(FantasyTeam)
            .with_table(FantasySelection)
            .with_table(FantasyGameweek)
            .with_table(FantasyPlayerStat)
            .with_table(FantasyState)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
