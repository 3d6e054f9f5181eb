//! Single-row fantasy state repository.
//!
//! The `fantasy_state` table holds exactly one row (id 1) pointing at the active
//! gameweek. It is written in the same transaction as the gameweek flags so readers
//! never observe two active gameweeks.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::server::error::AppError;

const STATE_ROW_ID: i32 = 1;

pub struct FantasyStateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FantasyStateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the id of the active gameweek, if any.
    pub async fn get_active_gameweek_id(&self) -> Result<Option<i32>, AppError> {
        let state = entity::prelude::FantasyState::find_by_id(STATE_ROW_ID)
            .one(self.db)
            .await?;

        Ok(state.and_then(|state| state.active_gameweek_id))
    }

    /// Points the state row at `gameweek_id`, creating the row on first use.
    pub async fn set_active_gameweek(&self, gameweek_id: Option<i32>) -> Result<(), AppError> {
        entity::prelude::FantasyState::insert(entity::fantasy_state::ActiveModel {
            id: ActiveValue::Set(STATE_ROW_ID),
            active_gameweek_id: ActiveValue::Set(gameweek_id),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::fantasy_state::Column::Id)
                .update_columns([
                    entity::fantasy_state::Column::ActiveGameweekId,
                    entity::fantasy_state::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
