//! Player record DTOs.
//!
//! Field names follow the column names the game client was built against
//! (`userid`, `nationalteam`, `hof`, ...).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::serde_id::deserialize_u64_from_number_or_string;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PlayerDto {
    #[serde(rename = "userid")]
    pub user_id: u64,
    #[serde(rename = "displayname")]
    pub display_name: Option<String>,
    pub team: Option<String>,
    pub division: Option<String>,
    #[serde(rename = "nationalteam")]
    pub national_team: Option<String>,
    pub rating: i32,
    #[serde(rename = "suspension")]
    pub suspended: bool,
    pub semi: bool,
    #[serde(rename = "hof")]
    pub hall_of_fame: String,
    pub management: String,
    #[serde(rename = "secondcareer")]
    pub second_career: bool,
    #[serde(rename = "gkmode")]
    pub gk_mode: bool,
    pub country: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub fantasy_price: Decimal,
}

/// Single player wrapped in the `success` envelope.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PlayerResponseDto {
    pub success: bool,
    #[serde(flatten)]
    pub player: PlayerDto,
}

impl From<PlayerDto> for PlayerResponseDto {
    fn from(player: PlayerDto) -> Self {
        Self {
            success: true,
            player,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PlayerListDto {
    pub success: bool,
    pub players: Vec<PlayerDto>,
}

/// Body of `POST /player`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct CreatePlayerDto {
    #[serde(
        rename = "userid",
        deserialize_with = "deserialize_u64_from_number_or_string"
    )]
    #[schema(value_type = u64)]
    pub user_id: u64,
    #[serde(rename = "displayname", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(rename = "nationalteam", default)]
    pub national_team: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(rename = "suspension", default)]
    pub suspended: Option<bool>,
    #[serde(default)]
    pub semi: Option<bool>,
    #[serde(rename = "hof", default)]
    pub hall_of_fame: Option<String>,
    #[serde(default)]
    pub management: Option<String>,
    #[serde(rename = "secondcareer", default)]
    pub second_career: Option<bool>,
    #[serde(rename = "gkmode", default)]
    pub gk_mode: Option<bool>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option", default)]
    #[schema(value_type = Option<f64>)]
    pub fantasy_price: Option<Decimal>,
}

/// Body of `PATCH /player/{userid}`; absent fields are left untouched.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct UpdatePlayerDto {
    #[serde(rename = "displayname", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(rename = "nationalteam", default)]
    pub national_team: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(rename = "suspension", default)]
    pub suspended: Option<bool>,
    #[serde(default)]
    pub semi: Option<bool>,
    #[serde(rename = "hof", default)]
    pub hall_of_fame: Option<String>,
    #[serde(default)]
    pub management: Option<String>,
    #[serde(rename = "secondcareer", default)]
    pub second_career: Option<bool>,
    #[serde(rename = "gkmode", default)]
    pub gk_mode: Option<bool>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option", default)]
    #[schema(value_type = Option<f64>)]
    pub fantasy_price: Option<Decimal>,
}
