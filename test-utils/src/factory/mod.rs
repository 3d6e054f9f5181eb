//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM, bypassing the application's services.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::create_player(&db).await?;
//! let team = factory::create_fantasy_team(&db).await?;
//!
//! let keeper = factory::player::PlayerFactory::new(&db)
//!     .team("Ashford United")
//!     .price("5.0")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - League player entities
//! - `fantasy_team` - Fantasy team entities
//! - `fantasy_selection` - Squad selection entities
//! - `fantasy_gameweek` - Gameweek entities
//! - `helpers` - ID generation and multi-entity helpers

pub mod fantasy_gameweek;
pub mod fantasy_selection;
pub mod fantasy_team;
pub mod helpers;
pub mod player;

pub use fantasy_gameweek::create_active_gameweek;
pub use fantasy_selection::create_selection;
pub use fantasy_team::create_fantasy_team;
pub use player::create_player;
