//! Fantasy league repositories.

pub mod gameweek;
pub mod player_stat;
pub mod selection;
pub mod state;
pub mod team;
