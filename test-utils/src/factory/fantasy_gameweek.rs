//! Fantasy gameweek factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for gameweeks. Inserting an active gameweek here does not update the
/// `fantasy_state` pointer; use `create_active_gameweek` for that.
pub struct FantasyGameweekFactory<'a> {
    db: &'a DatabaseConnection,
    number: i32,
    season: String,
    is_active: bool,
}

impl<'a> FantasyGameweekFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            number: 1,
            season: "S1".to_string(),
            is_active: true,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::fantasy_gameweek::Model, DbErr> {
        let now = Utc::now();
        entity::fantasy_gameweek::ActiveModel {
            number: ActiveValue::Set(self.number),
            season: ActiveValue::Set(self.season),
            is_active: ActiveValue::Set(self.is_active),
            started_at: ActiveValue::Set(now),
            ended_at: ActiveValue::Set((!self.is_active).then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active gameweek and points the state row at it.
pub async fn create_active_gameweek(
    db: &DatabaseConnection,
) -> Result<entity::fantasy_gameweek::Model, DbErr> {
    let gameweek = FantasyGameweekFactory::new(db).build().await?;

    entity::fantasy_state::ActiveModel {
        id: ActiveValue::Set(1),
        active_gameweek_id: ActiveValue::Set(Some(gameweek.id)),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await?;

    Ok(gameweek)
}
