//! Fantasy team repository.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::fantasy::FantasyTeam,
    util::money::{amount_from_column, amount_to_column},
};

pub struct FantasyTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FantasyTeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a fantasy team with zero points.
    ///
    /// # Returns
    /// - `Ok(FantasyTeam)` - Created team
    /// - `Err(AppError::DbErr)` - Insert failed, including the unique owner constraint
    pub async fn create(
        &self,
        owner_discord_id: u64,
        team_name: String,
        budget: Decimal,
    ) -> Result<FantasyTeam, AppError> {
        let entity = entity::fantasy_team::ActiveModel {
            owner_discord_id: ActiveValue::Set(owner_discord_id.to_string()),
            team_name: ActiveValue::Set(team_name),
            budget: ActiveValue::Set(amount_to_column(budget)),
            total_points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        FantasyTeam::from_entity(entity)
    }

    /// Finds the team owned by a Discord user.
    pub async fn find_by_owner(
        &self,
        owner_discord_id: u64,
    ) -> Result<Option<FantasyTeam>, AppError> {
        entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::OwnerDiscordId.eq(owner_discord_id.to_string()))
            .one(self.db)
            .await?
            .map(FantasyTeam::from_entity)
            .transpose()
    }

    /// Gets every team in creation order.
    pub async fn get_all(&self) -> Result<Vec<FantasyTeam>, AppError> {
        entity::prelude::FantasyTeam::find()
            .order_by_asc(entity::fantasy_team::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(FantasyTeam::from_entity)
            .collect()
    }

    /// Gets the top `limit` teams by total points, then by name.
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<FantasyTeam>, AppError> {
        entity::prelude::FantasyTeam::find()
            .order_by_desc(entity::fantasy_team::Column::TotalPoints)
            .order_by_asc(entity::fantasy_team::Column::TeamName)
            .order_by_asc(entity::fantasy_team::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(FantasyTeam::from_entity)
            .collect()
    }

    /// Adds `delta` to the team budget. Negative values deduct.
    ///
    /// # Returns
    /// - `Ok(FantasyTeam)` - Team after the adjustment
    /// - `Err(AppError::DbErr(RecordNotFound))` - No team with that id
    pub async fn adjust_budget(
        &self,
        team_id: i32,
        delta: Decimal,
    ) -> Result<FantasyTeam, AppError> {
        let team = self.get_entity(team_id).await?;
        let budget = amount_from_column("fantasy_team.budget", &team.budget)? + delta;

        let mut active = team.into_active_model();
        active.budget = ActiveValue::Set(amount_to_column(budget));

        FantasyTeam::from_entity(active.update(self.db).await?)
    }

    /// Overwrites the team budget.
    pub async fn set_budget(&self, team_id: i32, budget: Decimal) -> Result<FantasyTeam, AppError> {
        let mut active = self.get_entity(team_id).await?.into_active_model();
        active.budget = ActiveValue::Set(amount_to_column(budget));

        FantasyTeam::from_entity(active.update(self.db).await?)
    }

    /// Adds `points` to the team's running total.
    pub async fn add_points(&self, team_id: i32, points: i64) -> Result<FantasyTeam, AppError> {
        let team = self.get_entity(team_id).await?;
        let total = team.total_points + points;

        let mut active = team.into_active_model();
        active.total_points = ActiveValue::Set(total);

        FantasyTeam::from_entity(active.update(self.db).await?)
    }

    async fn get_entity(&self, team_id: i32) -> Result<entity::fantasy_team::Model, DbErr> {
        entity::prelude::FantasyTeam::find_by_id(team_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Fantasy team {} not found", team_id)))
    }
}
