//! Gameweek and match statistic domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::fantasy::{GameweekDto, PlayerStatDto},
    server::{
        error::AppError, model::fantasy::FantasyPosition, util::parse::player_id_from_db,
    },
};

/// A scoring period. At most one gameweek is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Gameweek {
    pub id: i32,
    pub number: i32,
    pub season: String,
    pub is_active: bool,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Gameweek {
    pub fn from_entity(entity: entity::fantasy_gameweek::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            season: entity.season,
            is_active: entity.is_active,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
        }
    }

    pub fn into_dto(self) -> GameweekDto {
        GameweekDto {
            id: self.id,
            number: self.number,
            season: self.season,
            is_active: self.is_active,
            started_at: self.started_at,
            ended_at: self.ended_at,
        }
    }
}

/// Match performance of one player, as entered by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    /// Position the player played in this match; drives the scoring table.
    pub position: FantasyPosition,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheet: bool,
    /// Only scored for goalkeepers.
    pub saves: u32,
    /// Man of the match.
    pub motm: bool,
    pub yellow_card: bool,
    pub red_card: bool,
}

impl StatLine {
    /// A stat line with nothing but an appearance.
    pub fn appearance(position: FantasyPosition) -> Self {
        Self {
            position,
            goals: 0,
            assists: 0,
            clean_sheet: false,
            saves: 0,
            motm: false,
            yellow_card: false,
            red_card: false,
        }
    }
}

/// Persisted stat entry with its frozen points value.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub id: i32,
    pub gameweek_id: i32,
    pub player_id: u64,
    pub line: StatLine,
    pub points: i32,
}

impl PlayerStat {
    pub fn from_entity(entity: entity::fantasy_player_stat::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            gameweek_id: entity.gameweek_id,
            player_id: player_id_from_db(entity.player_id),
            line: StatLine {
                position: FantasyPosition::from_column(&entity.position)?,
                goals: entity.goals.max(0) as u32,
                assists: entity.assists.max(0) as u32,
                clean_sheet: entity.clean_sheet,
                saves: entity.saves.max(0) as u32,
                motm: entity.motm,
                yellow_card: entity.yellow_card,
                red_card: entity.red_card,
            },
            points: entity.points,
        })
    }

    pub fn into_dto(self) -> PlayerStatDto {
        PlayerStatDto {
            id: self.id,
            gameweek_id: self.gameweek_id,
            player_id: self.player_id,
            position: self.line.position.to_string(),
            points: self.points,
        }
    }
}

/// Result of aggregating a gameweek's points into team totals.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateSummary {
    pub gameweek: Gameweek,
    /// Number of fantasy teams whose total was updated.
    pub teams_updated: usize,
    /// Sum of points added across all teams.
    pub points_awarded: i64,
}
