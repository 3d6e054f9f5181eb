//! Player roster domain models and parameters.
//!
//! Provides the domain model for league players along with the fixed vocabularies
//! stored on a player record (Hall of Fame position and management role), and the
//! parameter types used to create and update player records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::{fmt, str::FromStr};

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    server::{
        error::{internal::InternalError, roster::RosterError, AppError},
        util::{money::amount_from_column, parse::player_id_from_db},
    },
};

/// Hall of Fame position awarded to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HallOfFame {
    #[default]
    None,
    Gk,
    Def,
    Mid,
    Att,
}

impl HallOfFame {
    pub const ALL: [HallOfFame; 5] = [Self::None, Self::Gk, Self::Def, Self::Mid, Self::Att];

    /// Stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Gk => "Gk",
            Self::Def => "Def",
            Self::Mid => "Mid",
            Self::Att => "Att",
        }
    }

    /// Human readable label used in command choices.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Gk => "Goalkeeper",
            Self::Def => "Defender",
            Self::Mid => "Midfielder",
            Self::Att => "Attacker",
        }
    }
}

impl fmt::Display for HallOfFame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HallOfFame {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hof| hof.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RosterError::UnknownHallOfFame(s.to_string()))
    }
}

/// Management role a player holds at their club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagementRole {
    #[default]
    None,
    AssistantManager,
    TeamManager,
    TeamOwner,
}

impl ManagementRole {
    pub const ALL: [ManagementRole; 4] = [
        Self::None,
        Self::AssistantManager,
        Self::TeamManager,
        Self::TeamOwner,
    ];

    /// Stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::AssistantManager => "AssistantManager",
            Self::TeamManager => "TeamManager",
            Self::TeamOwner => "TeamOwner",
        }
    }

    /// Human readable label used in command choices.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::AssistantManager => "Assistant Manager",
            Self::TeamManager => "Team Manager",
            Self::TeamOwner => "Team Owner",
        }
    }
}

impl fmt::Display for ManagementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManagementRole {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RosterError::UnknownManagementRole(s.to_string()))
    }
}

/// League player with roster attributes and fantasy price.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// External (Roblox) user id.
    pub user_id: u64,
    /// Display name cached from the identity provider.
    pub display_name: Option<String>,
    pub team: Option<String>,
    /// Derived from `team` unless overridden.
    pub division: Option<String>,
    pub national_team: Option<String>,
    /// Rating between 0 and 100.
    pub rating: i32,
    pub suspended: bool,
    /// Semi-active player.
    pub semi: bool,
    pub hall_of_fame: HallOfFame,
    pub management: ManagementRole,
    /// Whether this is a secondary account of an existing player.
    pub second_career: bool,
    pub gk_mode: bool,
    pub country: Option<String>,
    /// Fantasy price in millions.
    pub fantasy_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player
    /// - `Err(AppError::InternalErr(CorruptColumn))` - Stored Hall of Fame or management
    ///   value is outside its vocabulary
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        let hall_of_fame =
            entity
                .hall_of_fame
                .parse()
                .map_err(|_| InternalError::CorruptColumn {
                    column: "player.hall_of_fame",
                    value: entity.hall_of_fame.clone(),
                })?;
        let management = entity
            .management
            .parse()
            .map_err(|_| InternalError::CorruptColumn {
                column: "player.management",
                value: entity.management.clone(),
            })?;

        Ok(Self {
            user_id: player_id_from_db(entity.user_id),
            display_name: entity.display_name,
            team: entity.team,
            division: entity.division,
            national_team: entity.national_team,
            rating: entity.rating,
            suspended: entity.suspended,
            semi: entity.semi,
            hall_of_fame,
            management,
            second_career: entity.second_career,
            gk_mode: entity.gk_mode,
            country: entity.country,
            fantasy_price: amount_from_column("player.fantasy_price", &entity.fantasy_price)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Name to show in messages, falling back to the id.
    pub fn name_or_id(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.user_id.to_string())
    }

    /// Converts the player domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            user_id: self.user_id,
            display_name: self.display_name,
            team: self.team,
            division: self.division,
            national_team: self.national_team,
            rating: self.rating,
            suspended: self.suspended,
            semi: self.semi,
            hall_of_fame: self.hall_of_fame.to_string(),
            management: self.management.to_string(),
            second_career: self.second_career,
            gk_mode: self.gk_mode,
            country: self.country,
            fantasy_price: self.fantasy_price,
        }
    }
}

/// Parameters for creating a player record.
///
/// Unset optional attributes take the column defaults. When `division` is `None` it is
/// derived from `team`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePlayerParam {
    pub user_id: u64,
    pub display_name: Option<String>,
    pub team: Option<String>,
    pub division: Option<String>,
    pub national_team: Option<String>,
    pub rating: Option<i64>,
    pub suspended: Option<bool>,
    pub semi: Option<bool>,
    pub hall_of_fame: Option<HallOfFame>,
    pub management: Option<ManagementRole>,
    pub second_career: Option<bool>,
    pub gk_mode: Option<bool>,
    pub country: Option<String>,
    pub fantasy_price: Option<Decimal>,
}

/// Partial update of a player record; only `Some` fields are written.
///
/// A team change recomputes the division; an explicit `division` in the same update
/// overrides the derived one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlayerParam {
    pub display_name: Option<String>,
    pub team: Option<String>,
    pub division: Option<String>,
    pub national_team: Option<String>,
    pub rating: Option<i64>,
    pub suspended: Option<bool>,
    pub semi: Option<bool>,
    pub hall_of_fame: Option<HallOfFame>,
    pub management: Option<ManagementRole>,
    pub second_career: Option<bool>,
    pub gk_mode: Option<bool>,
    pub country: Option<String>,
    pub fantasy_price: Option<Decimal>,
}

impl CreatePlayerParam {
    /// Converts the `POST /player` body.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParam)` - Converted parameters
    /// - `Err(RosterError)` - `hof` or `management` is outside its vocabulary
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id: dto.user_id,
            display_name: dto.display_name,
            team: dto.team,
            division: dto.division,
            national_team: dto.national_team,
            rating: dto.rating,
            suspended: dto.suspended,
            semi: dto.semi,
            hall_of_fame: dto.hall_of_fame.as_deref().map(str::parse::<HallOfFame>).transpose()?,
            management: dto.management.as_deref().map(str::parse::<ManagementRole>).transpose()?,
            second_career: dto.second_career,
            gk_mode: dto.gk_mode,
            country: dto.country,
            fantasy_price: dto.fantasy_price,
        })
    }
}

impl UpdatePlayerParam {
    /// Converts the `PATCH /player/{userid}` body.
    pub fn from_dto(dto: UpdatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            display_name: dto.display_name,
            team: dto.team,
            division: dto.division,
            national_team: dto.national_team,
            rating: dto.rating,
            suspended: dto.suspended,
            semi: dto.semi,
            hall_of_fame: dto.hall_of_fame.as_deref().map(str::parse::<HallOfFame>).transpose()?,
            management: dto.management.as_deref().map(str::parse::<ManagementRole>).transpose()?,
            second_career: dto.second_career,
            gk_mode: dto.gk_mode,
            country: dto.country,
            fantasy_price: dto.fantasy_price,
        })
    }

    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vocabularies_case_insensitively() {
        assert_eq!("gk".parse::<HallOfFame>(), Ok(HallOfFame::Gk));
        assert_eq!("None".parse::<HallOfFame>(), Ok(HallOfFame::None));
        assert_eq!(
            "teamowner".parse::<ManagementRole>(),
            Ok(ManagementRole::TeamOwner)
        );
    }

    #[test]
    fn rejects_unknown_vocabulary_values() {
        assert_eq!(
            "Striker".parse::<HallOfFame>(),
            Err(RosterError::UnknownHallOfFame("Striker".to_string()))
        );
        assert!("Chairman".parse::<ManagementRole>().is_err());
    }

    #[test]
    fn create_dto_rejects_unknown_hall_of_fame() {
        let dto = CreatePlayerDto {
            user_id: 1,
            hall_of_fame: Some("Striker".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            CreatePlayerParam::from_dto(dto),
            Err(AppError::RosterErr(RosterError::UnknownHallOfFame(_)))
        ));
    }

    #[test]
    fn update_dto_parses_vocabularies() {
        let dto = UpdatePlayerDto {
            hall_of_fame: Some("mid".to_string()),
            management: Some("TeamManager".to_string()),
            ..Default::default()
        };

        let param = UpdatePlayerParam::from_dto(dto).unwrap();

        assert_eq!(param.hall_of_fame, Some(HallOfFame::Mid));
        assert_eq!(param.management, Some(ManagementRole::TeamManager));
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdatePlayerParam::default().is_empty());
        assert!(!UpdatePlayerParam {
            rating: Some(50),
            ..Default::default()
        }
        .is_empty());
    }
}
