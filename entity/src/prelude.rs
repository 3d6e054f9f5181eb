pub use super::fantasy_gameweek::Entity as FantasyGameweek;
pub use super::fantasy_player_stat::Entity as FantasyPlayerStat;
pub use super::fantasy_selection::Entity as FantasySelection;
pub use super::fantasy_state::Entity as FantasyState;
pub use super::fantasy_team::Entity as FantasyTeam;
pub use super::player::Entity as Player;
