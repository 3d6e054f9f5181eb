mod fantasy_selection;
mod fantasy_team;
mod gameweek;
mod player;
mod player_stat;
