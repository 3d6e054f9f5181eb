//! Fantasy team factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating fantasy teams.
///
/// Defaults to a fresh team with the full 90.0m starting budget and no points.
pub struct FantasyTeamFactory<'a> {
    db: &'a DatabaseConnection,
    owner_discord_id: String,
    team_name: String,
    budget: String,
    total_points: i64,
}

impl<'a> FantasyTeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            owner_discord_id: (500_000_000 + id).to_string(),
            team_name: format!("Team {}", id),
            budget: "90.0".to_string(),
            total_points: 0,
        }
    }

    pub fn owner(mut self, owner_discord_id: u64) -> Self {
        self.owner_discord_id = owner_discord_id.to_string();
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    /// Sets the budget in millions, written as decimal text.
    pub fn budget(mut self, budget: &str) -> Self {
        self.budget = budget.to_string();
        self
    }

    pub fn total_points(mut self, total_points: i64) -> Self {
        self.total_points = total_points;
        self
    }

    pub async fn build(self) -> Result<entity::fantasy_team::Model, DbErr> {
        entity::fantasy_team::ActiveModel {
            owner_discord_id: ActiveValue::Set(self.owner_discord_id),
            team_name: ActiveValue::Set(self.team_name),
            budget: ActiveValue::Set(self.budget),
            total_points: ActiveValue::Set(self.total_points),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fantasy team with default values.
pub async fn create_fantasy_team(
    db: &DatabaseConnection,
) -> Result<entity::fantasy_team::Model, DbErr> {
    FantasyTeamFactory::new(db).build().await
}
