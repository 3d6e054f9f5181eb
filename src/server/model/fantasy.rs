//! Fantasy league domain models.
//!
//! Fantasy teams are owned by Discord users and hold a squad of selections. Each
//! selection pins a league player to a fantasy position chosen at pick time, which may
//! differ from the position the player actually plays.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::{fmt, str::FromStr};

use crate::{
    model::fantasy::{FantasyTeamDto, LeaderboardEntryDto, SquadDto, SquadEntryDto},
    server::{
        error::{fantasy::FantasyError, internal::InternalError, AppError},
        util::{
            money::amount_from_column,
            parse::{parse_u64_from_string, player_id_from_db},
        },
    },
};

/// Squad slot a selection occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FantasyPosition {
    Gk,
    Def,
    Mid,
    Att,
}

impl FantasyPosition {
    pub const ALL: [FantasyPosition; 4] = [Self::Gk, Self::Def, Self::Mid, Self::Att];

    /// Maximum number of selections a squad may hold at this position.
    pub fn slot_limit(self) -> usize {
        match self {
            Self::Gk => 1,
            Self::Def => 3,
            Self::Mid => 3,
            Self::Att => 2,
        }
    }

    /// Stored and displayed code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Gk => "GK",
            Self::Def => "DEF",
            Self::Mid => "MID",
            Self::Att => "ATT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gk => "Goalkeeper",
            Self::Def => "Defender",
            Self::Mid => "Midfielder",
            Self::Att => "Attacker",
        }
    }

    /// Parses a stored position code at the repository boundary.
    pub(crate) fn from_column(value: &str) -> Result<Self, InternalError> {
        value.parse().map_err(|_| InternalError::CorruptColumn {
            column: "position",
            value: value.to_string(),
        })
    }
}

impl fmt::Display for FantasyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FantasyPosition {
    type Err = FantasyError;

    /// Accepts codes (`GK`, `Def`) and labels (`goalkeeper`) in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(input) || p.label().eq_ignore_ascii_case(input))
            .ok_or_else(|| FantasyError::UnknownPosition(s.to_string()))
    }
}

/// Fantasy team owned by a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct FantasyTeam {
    pub id: i32,
    pub owner_discord_id: u64,
    pub team_name: String,
    /// Remaining budget in millions.
    pub budget: Decimal,
    /// Points accumulated over every calculated gameweek.
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

impl FantasyTeam {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(FantasyTeam)` - Converted team
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored owner id is not numeric
    /// - `Err(AppError::InternalErr(CorruptColumn))` - Stored budget is not a decimal
    pub fn from_entity(entity: entity::fantasy_team::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            owner_discord_id: parse_u64_from_string(entity.owner_discord_id)?,
            team_name: entity.team_name,
            budget: amount_from_column("fantasy_team.budget", &entity.budget)?,
            total_points: entity.total_points,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> FantasyTeamDto {
        FantasyTeamDto {
            id: self.id,
            owner_discord_id: self.owner_discord_id,
            team_name: self.team_name,
            budget: self.budget,
            total_points: self.total_points,
        }
    }
}

/// A player picked into a fantasy squad.
#[derive(Debug, Clone, PartialEq)]
pub struct FantasySelection {
    pub id: i32,
    pub fantasy_team_id: i32,
    pub player_id: u64,
    /// Position fixed at pick time.
    pub position: FantasyPosition,
    pub is_captain: bool,
}

impl FantasySelection {
    pub fn from_entity(entity: entity::fantasy_selection::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            fantasy_team_id: entity.fantasy_team_id,
            player_id: player_id_from_db(entity.player_id),
            position: FantasyPosition::from_column(&entity.position)?,
            is_captain: entity.is_captain,
        })
    }
}

/// Counts selections per position.
pub fn position_count(selections: &[FantasySelection], position: FantasyPosition) -> usize {
    selections
        .iter()
        .filter(|selection| selection.position == position)
        .count()
}

/// Selection joined with the roster data needed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SquadEntry {
    pub selection: FantasySelection,
    pub player_name: Option<String>,
    /// Current listed price of the player.
    pub price: Decimal,
}

/// A fantasy team with its full squad.
#[derive(Debug, Clone, PartialEq)]
pub struct Squad {
    pub team: FantasyTeam,
    pub entries: Vec<SquadEntry>,
}

impl Squad {
    pub fn captain(&self) -> Option<&SquadEntry> {
        self.entries.iter().find(|entry| entry.selection.is_captain)
    }

    pub fn into_dto(self) -> SquadDto {
        SquadDto {
            team: self.team.into_dto(),
            players: self
                .entries
                .into_iter()
                .map(|entry| SquadEntryDto {
                    player_id: entry.selection.player_id,
                    player_name: entry.player_name,
                    position: entry.selection.position.to_string(),
                    is_captain: entry.selection.is_captain,
                    price: entry.price,
                })
                .collect(),
        }
    }
}

/// Outcome of a successful pick.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
    /// Team after the price was deducted.
    pub team: FantasyTeam,
    pub selection: FantasySelection,
    pub price: Decimal,
}

/// Outcome of a successful drop.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    /// Team after the refund.
    pub team: FantasyTeam,
    pub refund: Decimal,
}

/// Leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub team: FantasyTeam,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            rank: self.rank,
            owner_discord_id: self.team.owner_discord_id,
            team_name: self.team.team_name,
            total_points: self.team.total_points,
        }
    }
}
