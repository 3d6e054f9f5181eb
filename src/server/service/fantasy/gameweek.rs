//! Gameweek lifecycle and scoring orchestration.
//!
//! At most one gameweek is active. The `is_active` flags and the single-row state
//! pointer are always written in one transaction, so starting a week ends the previous
//! one atomically. Point aggregation runs one transaction per fantasy team and adds to
//! the running total; calculating the same gameweek twice counts it twice.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::fantasy::{
        gameweek::GameweekRepository, player_stat::PlayerStatRepository,
        selection::FantasySelectionRepository, state::FantasyStateRepository,
        team::FantasyTeamRepository,
    },
    error::{fantasy::FantasyError, AppError},
    model::{
        fantasy::FantasySelection,
        gameweek::{CalculateSummary, Gameweek, PlayerStat, StatLine},
    },
    rules::fantasy::CAPTAIN_MULTIPLIER,
    service::{fantasy::points::calculate_points, identity::IdentityResolver},
};

/// Service driving gameweeks, stat entry and point aggregation.
pub struct GameweekService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameweekService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a new active gameweek, ending the current one if any.
    ///
    /// # Returns
    /// - `Ok(Gameweek)` - The new active gameweek
    /// - `Err(AppError::BadRequest)` - Number below 1 or blank season
    pub async fn new_week(&self, number: i32, season: &str) -> Result<Gameweek, AppError> {
        let season = season.trim();
        if number < 1 {
            return Err(AppError::BadRequest(
                "Gameweek number must be at least 1".to_string(),
            ));
        }
        if season.is_empty() {
            return Err(AppError::BadRequest("Season must not be empty".to_string()));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;
        let repo = GameweekRepository::new(&txn);

        let ended = repo.end_active(now).await?;
        let gameweek = repo.create_active(number, season.to_string(), now).await?;
        FantasyStateRepository::new(&txn)
            .set_active_gameweek(Some(gameweek.id))
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Started gameweek {} ({}), ended {} previous",
            gameweek.number,
            gameweek.season,
            ended
        );

        Ok(gameweek)
    }

    /// Ends the active gameweek.
    ///
    /// # Returns
    /// - `Ok(Gameweek)` - The gameweek as ended
    /// - `Err(FantasyError::NoActiveGameweek)` - Nothing is active
    pub async fn end_week(&self) -> Result<Gameweek, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let mut gameweek = active_gameweek(&txn).await?;

        GameweekRepository::new(&txn).end_active(now).await?;
        FantasyStateRepository::new(&txn)
            .set_active_gameweek(None)
            .await?;
        txn.commit().await?;

        gameweek.is_active = false;
        gameweek.ended_at = Some(now);

        tracing::info!("Ended gameweek {} ({})", gameweek.number, gameweek.season);

        Ok(gameweek)
    }

    /// Gets the active gameweek.
    ///
    /// # Returns
    /// - `Ok(Gameweek)` - The active gameweek
    /// - `Err(FantasyError::NoActiveGameweek)` - Nothing is active
    pub async fn active_gameweek(&self) -> Result<Gameweek, AppError> {
        active_gameweek(self.db).await
    }

    /// Records a stat line for a player in the active gameweek.
    ///
    /// `player` is a numeric id or a username resolved through `identity`. Points are
    /// computed now and stored with the row. Repeated entries for the same player are
    /// all kept and all count in `calculate`.
    ///
    /// # Returns
    /// - `Ok(PlayerStat)` - The stored stat row
    /// - `Err(FantasyError::NoActiveGameweek)` - Nothing is active
    /// - `Err(IdentityError::Unresolvable)` - Player input matches no account
    pub async fn add_stats(
        &self,
        player: &str,
        line: StatLine,
        identity: &dyn IdentityResolver,
    ) -> Result<PlayerStat, AppError> {
        active_gameweek(self.db).await?;

        let player_id = identity.resolve_identity(player).await?;
        let points = calculate_points(&line);

        let txn = self.db.begin().await?;
        let gameweek = active_gameweek(&txn).await?;
        let stat = PlayerStatRepository::new(&txn)
            .create(gameweek.id, player_id, &line, points)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Recorded {} points for player {} in gameweek {}",
            points,
            player_id,
            gameweek.number
        );

        Ok(stat)
    }

    /// Gets every stat row of the active gameweek.
    pub async fn stats(&self) -> Result<(Gameweek, Vec<PlayerStat>), AppError> {
        let gameweek = active_gameweek(self.db).await?;
        let stats = PlayerStatRepository::new(self.db)
            .get_by_gameweek(gameweek.id)
            .await?;

        Ok((gameweek, stats))
    }

    /// Adds the active gameweek's points to every fantasy team's total.
    ///
    /// Each team is handled in its own transaction that reads the current squad and
    /// the matching stat rows. Captains count double.
    ///
    /// # Returns
    /// - `Ok(CalculateSummary)` - Number of teams updated and points added
    /// - `Err(FantasyError::NoActiveGameweek)` - Nothing is active
    pub async fn calculate(&self) -> Result<CalculateSummary, AppError> {
        let gameweek = active_gameweek(self.db).await?;
        let teams = FantasyTeamRepository::new(self.db).get_all().await?;

        let mut teams_updated = 0;
        let mut points_awarded = 0;

        for team in teams {
            let txn = self.db.begin().await?;

            let selections = FantasySelectionRepository::new(&txn)
                .get_by_team(team.id)
                .await?;
            let player_ids: Vec<u64> = selections.iter().map(|s| s.player_id).collect();
            let stats = PlayerStatRepository::new(&txn)
                .get_by_gameweek_and_players(gameweek.id, &player_ids)
                .await?;

            let points = squad_points(&selections, &stats);
            FantasyTeamRepository::new(&txn)
                .add_points(team.id, points)
                .await?;
            txn.commit().await?;

            teams_updated += 1;
            points_awarded += points;
        }

        tracing::info!(
            "Calculated gameweek {}: {} teams updated, {} points awarded",
            gameweek.number,
            teams_updated,
            points_awarded
        );

        Ok(CalculateSummary {
            gameweek,
            teams_updated,
            points_awarded,
        })
    }
}

/// Resolves the active gameweek through the state pointer.
async fn active_gameweek<C: ConnectionTrait>(db: &C) -> Result<Gameweek, AppError> {
    let id = FantasyStateRepository::new(db)
        .get_active_gameweek_id()
        .await?
        .ok_or(FantasyError::NoActiveGameweek)?;

    GameweekRepository::new(db)
        .find_by_id(id)
        .await?
        .filter(|gameweek| gameweek.is_active)
        .ok_or_else(|| FantasyError::NoActiveGameweek.into())
}

/// Sums a squad's points for one gameweek, doubling the captain.
fn squad_points(selections: &[FantasySelection], stats: &[PlayerStat]) -> i64 {
    selections
        .iter()
        .map(|selection| {
            let points: i64 = stats
                .iter()
                .filter(|stat| stat.player_id == selection.player_id)
                .map(|stat| i64::from(stat.points))
                .sum();

            if selection.is_captain {
                points * CAPTAIN_MULTIPLIER
            } else {
                points
            }
        })
        .sum()
}
