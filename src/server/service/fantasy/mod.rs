//! Fantasy league services.
//!
//! - `points` - Pure scoring of a single stat line
//! - `roster` - Team registration and squad management
//! - `gameweek` - Gameweek lifecycle, stat entry and point aggregation

pub mod gameweek;
pub mod points;
pub mod roster;
