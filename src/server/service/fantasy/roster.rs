//! Fantasy roster engine.
//!
//! Manages fantasy teams and their squads. Every mutation that touches more than one
//! row runs in a single transaction: a pick inserts the selection and deducts the
//! budget together, a drop deletes and refunds together, and a captain change clears
//! and sets the flag together.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{
        fantasy::{selection::FantasySelectionRepository, team::FantasyTeamRepository},
        player::PlayerRepository,
    },
    error::{fantasy::FantasyError, roster::RosterError, AppError},
    model::{
        fantasy::{
            position_count, DropOutcome, FantasyPosition, FantasySelection, FantasyTeam,
            LeaderboardEntry, PickOutcome, Squad, SquadEntry,
        },
        player::Player,
    },
    rules::fantasy::{MAX_SQUAD_SIZE, STARTING_BUDGET},
    util::money::is_valid_amount,
};

/// Service providing fantasy team and squad operations.
pub struct FantasyRosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FantasyRosterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a fantasy team for a Discord user with the starting budget.
    ///
    /// # Returns
    /// - `Ok(FantasyTeam)` - The new team
    /// - `Err(FantasyError::AlreadyRegistered)` - The owner already has a team
    /// - `Err(AppError::BadRequest)` - Team name is blank
    pub async fn register(&self, owner_id: u64, team_name: &str) -> Result<FantasyTeam, AppError> {
        let team_name = team_name.trim();
        if team_name.is_empty() {
            return Err(AppError::BadRequest("Team name must not be empty".to_string()));
        }

        let txn = self.db.begin().await?;
        let repo = FantasyTeamRepository::new(&txn);

        if repo.find_by_owner(owner_id).await?.is_some() {
            return Err(FantasyError::AlreadyRegistered.into());
        }

        let team = repo
            .create(owner_id, team_name.to_string(), STARTING_BUDGET)
            .await
            .map_err(|err| err.or_on_unique_violation(FantasyError::AlreadyRegistered))?;
        txn.commit().await?;

        tracing::info!("Registered fantasy team '{}' for {}", team.team_name, owner_id);

        Ok(team)
    }

    /// Adds a player to the owner's squad at `position` and pays their current price.
    ///
    /// Checks run in order: team registered, player registered, budget, squad size,
    /// duplicate, position limit.
    ///
    /// # Returns
    /// - `Ok(PickOutcome)` - Selection and team after the deduction
    /// - `Err(FantasyError)` - A rule rejected the pick; nothing was written
    pub async fn pick(
        &self,
        owner_id: u64,
        player_id: u64,
        position: FantasyPosition,
    ) -> Result<PickOutcome, AppError> {
        let txn = self.db.begin().await?;
        let team_repo = FantasyTeamRepository::new(&txn);
        let selection_repo = FantasySelectionRepository::new(&txn);

        let team = team_repo
            .find_by_owner(owner_id)
            .await?
            .ok_or(FantasyError::TeamNotRegistered)?;
        let player = PlayerRepository::new(&txn)
            .find_by_id(player_id)
            .await?
            .ok_or(FantasyError::PlayerNotRegistered(player_id))?;

        let price = player.fantasy_price;
        if price > team.budget {
            return Err(FantasyError::InsufficientBudget {
                price,
                budget: team.budget,
            }
            .into());
        }

        let selections = selection_repo.get_by_team(team.id).await?;
        check_squad_rules(&selections, player_id, position)?;

        let selection = selection_repo
            .create(team.id, player_id, position)
            .await
            .map_err(|err| err.or_on_unique_violation(FantasyError::DuplicatePlayer(player_id)))?;
        let team = team_repo.adjust_budget(team.id, -price).await?;
        txn.commit().await?;

        tracing::debug!(
            "Team {} picked player {} as {} for {}m",
            team.id,
            player_id,
            position,
            price
        );

        Ok(PickOutcome {
            team,
            selection,
            price,
        })
    }

    /// Removes a player from the owner's squad and refunds their current price.
    ///
    /// The refund uses the price at drop time, which may differ from the price paid.
    ///
    /// # Returns
    /// - `Ok(DropOutcome)` - Team after the refund
    /// - `Err(FantasyError::PlayerNotInSquad)` - Player is not selected
    pub async fn drop_player(&self, owner_id: u64, player_id: u64) -> Result<DropOutcome, AppError> {
        let txn = self.db.begin().await?;
        let team_repo = FantasyTeamRepository::new(&txn);
        let selection_repo = FantasySelectionRepository::new(&txn);

        let team = team_repo
            .find_by_owner(owner_id)
            .await?
            .ok_or(FantasyError::TeamNotRegistered)?;
        let selection = selection_repo
            .find_by_team_and_player(team.id, player_id)
            .await?
            .ok_or(FantasyError::PlayerNotInSquad(player_id))?;

        let refund = PlayerRepository::new(&txn)
            .find_by_id(player_id)
            .await?
            .map(|player| player.fantasy_price)
            .unwrap_or(Decimal::ZERO);

        selection_repo.delete(selection.id).await?;
        let team = team_repo.adjust_budget(team.id, refund).await?;
        txn.commit().await?;

        Ok(DropOutcome { team, refund })
    }

    /// Makes a selected player the squad captain, replacing any previous captain.
    ///
    /// # Returns
    /// - `Ok(FantasySelection)` - The new captain's selection
    /// - `Err(FantasyError::PlayerNotInSquad)` - Player is not selected
    pub async fn set_captain(
        &self,
        owner_id: u64,
        player_id: u64,
    ) -> Result<FantasySelection, AppError> {
        let txn = self.db.begin().await?;
        let selection_repo = FantasySelectionRepository::new(&txn);

        let team = FantasyTeamRepository::new(&txn)
            .find_by_owner(owner_id)
            .await?
            .ok_or(FantasyError::TeamNotRegistered)?;
        let mut selection = selection_repo
            .find_by_team_and_player(team.id, player_id)
            .await?
            .ok_or(FantasyError::PlayerNotInSquad(player_id))?;

        selection_repo.clear_captain(team.id).await?;
        selection_repo.set_captain(selection.id).await?;
        txn.commit().await?;

        selection.is_captain = true;

        Ok(selection)
    }

    /// Sets a player's fantasy price. Existing selections keep their position; only
    /// future picks and drops use the new price.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with the new price
    /// - `Err(FantasyError::InvalidAmount)` - Negative price
    /// - `Err(RosterError::PlayerNotFound)` - No such player
    pub async fn set_price(&self, player_id: u64, price: Decimal) -> Result<Player, AppError> {
        if !is_valid_amount(price) {
            return Err(FantasyError::InvalidAmount(price.to_string()).into());
        }

        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        if !repo.set_fantasy_price(player_id, price).await? {
            return Err(RosterError::PlayerNotFound(player_id).into());
        }
        let player = repo
            .find_by_id(player_id)
            .await?
            .ok_or(RosterError::PlayerNotFound(player_id))?;
        txn.commit().await?;

        tracing::info!("Set fantasy price of {} to {}m", player_id, price);

        Ok(player)
    }

    /// Overwrites the owner's budget.
    ///
    /// # Returns
    /// - `Ok(FantasyTeam)` - Team with the new budget
    /// - `Err(FantasyError::InvalidAmount)` - Negative amount
    /// - `Err(FantasyError::TeamNotRegistered)` - Owner has no team
    pub async fn reset_budget(&self, owner_id: u64, amount: Decimal) -> Result<FantasyTeam, AppError> {
        if !is_valid_amount(amount) {
            return Err(FantasyError::InvalidAmount(amount.to_string()).into());
        }

        let txn = self.db.begin().await?;
        let repo = FantasyTeamRepository::new(&txn);

        let team = repo
            .find_by_owner(owner_id)
            .await?
            .ok_or(FantasyError::TeamNotRegistered)?;
        let team = repo.set_budget(team.id, amount).await?;
        txn.commit().await?;

        tracing::info!("Reset budget of team {} to {}m", team.id, amount);

        Ok(team)
    }

    /// Gets the owner's team with every selection joined to the player's name and
    /// current price.
    pub async fn squad(&self, owner_id: u64) -> Result<Squad, AppError> {
        let team = FantasyTeamRepository::new(self.db)
            .find_by_owner(owner_id)
            .await?
            .ok_or(FantasyError::TeamNotRegistered)?;
        let selections = FantasySelectionRepository::new(self.db)
            .get_by_team(team.id)
            .await?;

        let player_ids: Vec<u64> = selections.iter().map(|s| s.player_id).collect();
        let players: HashMap<u64, Player> = PlayerRepository::new(self.db)
            .find_many(&player_ids)
            .await?
            .into_iter()
            .map(|player| (player.user_id, player))
            .collect();

        let entries = selections
            .into_iter()
            .map(|selection| {
                let player = players.get(&selection.player_id);
                SquadEntry {
                    player_name: player.and_then(|p| p.display_name.clone()),
                    price: player.map(|p| p.fantasy_price).unwrap_or(Decimal::ZERO),
                    selection,
                }
            })
            .collect();

        Ok(Squad { team, entries })
    }

    /// Gets the top `limit` teams ranked by total points, ties broken by name.
    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, AppError> {
        let teams = FantasyTeamRepository::new(self.db)
            .get_leaderboard(limit)
            .await?;

        Ok(teams
            .into_iter()
            .enumerate()
            .map(|(index, team)| LeaderboardEntry {
                rank: index + 1,
                team,
            })
            .collect())
    }
}

/// Applies the squad size, duplicate and position limit rules to a prospective pick.
fn check_squad_rules(
    selections: &[FantasySelection],
    player_id: u64,
    position: FantasyPosition,
) -> Result<(), FantasyError> {
    if selections.len() >= MAX_SQUAD_SIZE {
        return Err(FantasyError::SquadFull(MAX_SQUAD_SIZE));
    }
    if selections.iter().any(|s| s.player_id == player_id) {
        return Err(FantasyError::DuplicatePlayer(player_id));
    }

    let limit = position.slot_limit();
    if position_count(selections, position) >= limit {
        return Err(FantasyError::PositionLimitReached { position, limit });
    }

    Ok(())
}
