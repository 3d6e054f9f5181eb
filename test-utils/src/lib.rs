//! League Bot Test Utils
//!
//! Shared testing utilities for the league bot. Provides a builder for test contexts
//! backed by in-memory SQLite databases with the schema created straight from the
//! SeaORM entities, plus factories for seeding rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_roster_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let player = factory::player::create_player(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
