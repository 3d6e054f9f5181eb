//! SeaORM entities for the league roster and fantasy game tables.

pub mod prelude;

pub mod fantasy_gameweek;
pub mod fantasy_player_stat;
pub mod fantasy_selection;
pub mod fantasy_state;
pub mod fantasy_team;
pub mod player;
