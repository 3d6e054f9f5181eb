//! Fantasy selection factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for squad selections. The team and player rows must already exist.
pub struct FantasySelectionFactory<'a> {
    db: &'a DatabaseConnection,
    fantasy_team_id: i32,
    player_id: i64,
    position: String,
    is_captain: bool,
}

impl<'a> FantasySelectionFactory<'a> {
    /// Defaults to a non-captain midfielder.
    pub fn new(db: &'a DatabaseConnection, fantasy_team_id: i32, player_id: i64) -> Self {
        Self {
            db,
            fantasy_team_id,
            player_id,
            position: "MID".to_string(),
            is_captain: false,
        }
    }

    /// Sets the stored position code (`GK`, `DEF`, `MID` or `ATT`).
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn captain(mut self, is_captain: bool) -> Self {
        self.is_captain = is_captain;
        self
    }

    pub async fn build(self) -> Result<entity::fantasy_selection::Model, DbErr> {
        entity::fantasy_selection::ActiveModel {
            fantasy_team_id: ActiveValue::Set(self.fantasy_team_id),
            player_id: ActiveValue::Set(self.player_id),
            position: ActiveValue::Set(self.position),
            is_captain: ActiveValue::Set(self.is_captain),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-captain selection at `position`.
pub async fn create_selection(
    db: &DatabaseConnection,
    fantasy_team_id: i32,
    player_id: i64,
    position: &str,
) -> Result<entity::fantasy_selection::Model, DbErr> {
    FantasySelectionFactory::new(db, fantasy_team_id, player_id)
        .position(position)
        .build()
        .await
}
