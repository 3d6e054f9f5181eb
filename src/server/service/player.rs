//! Player roster service.
//!
//! Validates roster writes against the league vocabulary, derives divisions from teams
//! and orchestrates the player repository. Every write that reads the current record
//! first runs inside one transaction.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::player::PlayerRepository,
    error::{roster::RosterError, AppError},
    model::player::{CreatePlayerParam, HallOfFame, ManagementRole, Player, UpdatePlayerParam},
    rules::league::League,
    service::identity::IdentityResolver,
    util::money::is_valid_amount,
};

/// Service providing business logic for the player roster.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
    league: &'a League,
}

impl<'a> PlayerService<'a> {
    /// Creates a new PlayerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `league` - Club and division vocabulary writes are checked against
    pub fn new(db: &'a DatabaseConnection, league: &'a League) -> Self {
        Self { db, league }
    }

    /// Gets a player by external id.
    ///
    /// # Returns
    /// - `Ok(Player)` - The player
    /// - `Err(RosterError::PlayerNotFound)` - No record for that id
    pub async fn lookup(&self, user_id: u64) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| RosterError::PlayerNotFound(user_id).into())
    }

    /// Creates a player record.
    ///
    /// Team and division are validated and stored in their canonical spelling. Without
    /// an explicit division the division is derived from the team.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(RosterError::PlayerAlreadyExists)` - A record with that id exists
    /// - `Err(RosterError)` - Team, division, rating or price is invalid
    pub async fn create(&self, mut param: CreatePlayerParam) -> Result<Player, AppError> {
        if let Some(team) = param.team.take() {
            param.team = Some(self.validate_team(&team)?);
        }
        param.division = match param.division.take() {
            Some(division) => Some(self.validate_division(&division)?),
            None => param
                .team
                .as_deref()
                .and_then(|team| self.league.division_for_team(team))
                .map(str::to_string),
        };
        if let Some(rating) = param.rating {
            validate_rating(rating)?;
        }
        if let Some(price) = param.fantasy_price {
            validate_price(price)?;
        }

        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        if repo.find_by_id(param.user_id).await?.is_some() {
            return Err(RosterError::PlayerAlreadyExists(param.user_id).into());
        }

        let user_id = param.user_id;
        let player = repo
            .create(param)
            .await
            .map_err(|err| err.or_on_unique_violation(RosterError::PlayerAlreadyExists(user_id)))?;
        txn.commit().await?;

        tracing::info!("Created player {}", player.user_id);

        Ok(player)
    }

    /// Applies a partial update to a player.
    ///
    /// Only `Some` fields are written. A team change recomputes the division; an
    /// explicit division in the same update overrides the derived one and is not checked
    /// against the team.
    ///
    /// # Returns
    /// - `Ok(Player)` - The player after the update
    /// - `Err(RosterError::PlayerNotFound)` - No record for that id
    /// - `Err(RosterError)` - A supplied value is outside its vocabulary or range
    pub async fn update(&self, user_id: u64, param: UpdatePlayerParam) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let mut player = repo
            .find_by_id(user_id)
            .await?
            .ok_or(RosterError::PlayerNotFound(user_id))?;

        if param.is_empty() {
            return Ok(player);
        }

        self.apply_update(&mut player, param)?;

        let player = repo.update(player).await?;
        txn.commit().await?;

        Ok(player)
    }

    /// Moves a player to another team and recomputes their division.
    pub async fn set_team(&self, user_id: u64, team: &str) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                team: Some(team.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Overrides a player's division without touching the team.
    pub async fn set_division(&self, user_id: u64, division: &str) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                division: Some(division.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_rating(&self, user_id: u64, rating: i64) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                rating: Some(rating),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_suspended(&self, user_id: u64, suspended: bool) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                suspended: Some(suspended),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_hall_of_fame(
        &self,
        user_id: u64,
        hall_of_fame: HallOfFame,
    ) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                hall_of_fame: Some(hall_of_fame),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_management(
        &self,
        user_id: u64,
        management: ManagementRole,
    ) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                management: Some(management),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_national_team(
        &self,
        user_id: u64,
        national_team: &str,
    ) -> Result<Player, AppError> {
        self.update(
            user_id,
            UpdatePlayerParam {
                national_team: Some(national_team.trim().to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Deletes a player and their fantasy selections.
    ///
    /// Teams that had the player selected are not refunded.
    ///
    /// # Returns
    /// - `Ok(())` - Player deleted
    /// - `Err(RosterError::PlayerNotFound)` - Nothing was deleted
    pub async fn delete(&self, user_id: u64) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !PlayerRepository::new(&txn).delete(user_id).await? {
            return Err(RosterError::PlayerNotFound(user_id).into());
        }

        txn.commit().await?;

        tracing::info!("Deleted player {}", user_id);

        Ok(())
    }

    /// Gets every player, highest rating first.
    pub async fn list(&self) -> Result<Vec<Player>, AppError> {
        PlayerRepository::new(self.db).get_all_by_rating().await
    }

    /// Gets the players of a team, highest rating first.
    ///
    /// Known teams match case-insensitively; any other name is matched verbatim and
    /// usually yields an empty list.
    pub async fn list_by_team(&self, team: &str) -> Result<Vec<Player>, AppError> {
        let team = self
            .league
            .canonical_team(team)
            .unwrap_or_else(|| team.to_string());

        PlayerRepository::new(self.db).get_by_team(&team).await
    }

    /// Refreshes the cached display name from the identity provider.
    ///
    /// Best effort: provider failures are logged and yield `None`.
    pub async fn refresh_display_name(
        &self,
        user_id: u64,
        identity: &dyn IdentityResolver,
    ) -> Option<String> {
        let name = match identity.fetch_display_name(user_id).await {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!("Failed to fetch display name for {}: {}", user_id, err);
                return None;
            }
        };

        match PlayerRepository::new(self.db)
            .set_display_name(user_id, &name)
            .await
        {
            Ok(_) => Some(name),
            Err(err) => {
                tracing::warn!("Failed to store display name for {}: {}", user_id, err);
                None
            }
        }
    }

    fn validate_team(&self, team: &str) -> Result<String, RosterError> {
        self.league
            .canonical_team(team)
            .ok_or_else(|| RosterError::UnknownTeam(team.to_string()))
    }

    fn validate_division(&self, division: &str) -> Result<String, RosterError> {
        self.league
            .canonical_division(division)
            .ok_or_else(|| RosterError::UnknownDivision(division.to_string()))
    }

    fn apply_update(&self, player: &mut Player, param: UpdatePlayerParam) -> Result<(), RosterError> {
        if let Some(team) = param.team {
            let team = self.validate_team(&team)?;
            player.division = self.league.division_for_team(&team).map(str::to_string);
            player.team = Some(team);
        }
        if let Some(division) = param.division {
            player.division = Some(self.validate_division(&division)?);
        }
        if let Some(rating) = param.rating {
            player.rating = validate_rating(rating)?;
        }
        if let Some(price) = param.fantasy_price {
            validate_price(price)?;
            player.fantasy_price = price;
        }
        if let Some(display_name) = param.display_name {
            player.display_name = Some(display_name);
        }
        if let Some(national_team) = param.national_team {
            player.national_team = Some(national_team);
        }
        if let Some(country) = param.country {
            player.country = Some(country);
        }
        if let Some(suspended) = param.suspended {
            player.suspended = suspended;
        }
        if let Some(semi) = param.semi {
            player.semi = semi;
        }
        if let Some(hall_of_fame) = param.hall_of_fame {
            player.hall_of_fame = hall_of_fame;
        }
        if let Some(management) = param.management {
            player.management = management;
        }
        if let Some(second_career) = param.second_career {
            player.second_career = second_career;
        }
        if let Some(gk_mode) = param.gk_mode {
            player.gk_mode = gk_mode;
        }
        Ok(())
    }
}

fn validate_rating(rating: i64) -> Result<i32, RosterError> {
    if !(0..=100).contains(&rating) {
        return Err(RosterError::RatingOutOfRange(rating));
    }
    Ok(rating as i32)
}

fn validate_price(price: Decimal) -> Result<(), RosterError> {
    if !is_valid_amount(price) {
        return Err(RosterError::InvalidPrice(price.to_string()));
    }
    Ok(())
}
