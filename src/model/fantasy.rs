//! Read-only fantasy league DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::serde_id::{deserialize_u64_from_string, serialize_u64_as_string};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FantasyTeamDto {
    pub id: i32,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub owner_discord_id: u64,
    pub team_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub budget: Decimal,
    pub total_points: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SquadEntryDto {
    pub player_id: u64,
    pub player_name: Option<String>,
    pub position: String,
    pub is_captain: bool,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SquadDto {
    pub team: FantasyTeamDto,
    pub players: Vec<SquadEntryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct LeaderboardEntryDto {
    pub rank: usize,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub owner_discord_id: u64,
    pub team_name: String,
    pub total_points: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct LeaderboardDto {
    pub success: bool,
    pub teams: Vec<LeaderboardEntryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct GameweekDto {
    pub id: i32,
    pub number: i32,
    pub season: String,
    pub is_active: bool,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PlayerStatDto {
    pub id: i32,
    pub gameweek_id: i32,
    pub player_id: u64,
    pub position: String,
    pub points: i32,
}

/// Active gameweek with every stat row entered for it.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct GameweekStatsDto {
    pub gameweek: GameweekDto,
    pub stats: Vec<PlayerStatDto>,
}
