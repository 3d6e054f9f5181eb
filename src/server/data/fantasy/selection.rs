//! Fantasy squad selection repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::fantasy::{FantasyPosition, FantasySelection},
    util::parse::player_id_to_db,
};

pub struct FantasySelectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FantasySelectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a non-captain selection.
    ///
    /// # Returns
    /// - `Ok(FantasySelection)` - Created selection
    /// - `Err(AppError::DbErr)` - Insert failed, including the unique (team, player) index
    pub async fn create(
        &self,
        fantasy_team_id: i32,
        player_id: u64,
        position: FantasyPosition,
    ) -> Result<FantasySelection, AppError> {
        let entity = entity::fantasy_selection::ActiveModel {
            fantasy_team_id: ActiveValue::Set(fantasy_team_id),
            player_id: ActiveValue::Set(player_id_to_db(player_id)?),
            position: ActiveValue::Set(position.code().to_string()),
            is_captain: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        FantasySelection::from_entity(entity)
    }

    /// Gets a team's selections in pick order.
    pub async fn get_by_team(&self, fantasy_team_id: i32) -> Result<Vec<FantasySelection>, AppError> {
        entity::prelude::FantasySelection::find()
            .filter(entity::fantasy_selection::Column::FantasyTeamId.eq(fantasy_team_id))
            .order_by_asc(entity::fantasy_selection::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(FantasySelection::from_entity)
            .collect()
    }

    /// Finds the selection of `player_id` in a team's squad.
    pub async fn find_by_team_and_player(
        &self,
        fantasy_team_id: i32,
        player_id: u64,
    ) -> Result<Option<FantasySelection>, AppError> {
        entity::prelude::FantasySelection::find()
            .filter(entity::fantasy_selection::Column::FantasyTeamId.eq(fantasy_team_id))
            .filter(entity::fantasy_selection::Column::PlayerId.eq(player_id_to_db(player_id)?))
            .one(self.db)
            .await?
            .map(FantasySelection::from_entity)
            .transpose()
    }

    /// Deletes a selection by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Selection deleted
    /// - `Ok(false)` - Nothing matched
    pub async fn delete(&self, selection_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::FantasySelection::delete_by_id(selection_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears the captain flag on every selection of a team.
    pub async fn clear_captain(&self, fantasy_team_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::FantasySelection::update_many()
            .col_expr(entity::fantasy_selection::Column::IsCaptain, Expr::value(false))
            .filter(entity::fantasy_selection::Column::FantasyTeamId.eq(fantasy_team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks a single selection as captain.
    pub async fn set_captain(&self, selection_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::FantasySelection::update_many()
            .col_expr(entity::fantasy_selection::Column::IsCaptain, Expr::value(true))
            .filter(entity::fantasy_selection::Column::Id.eq(selection_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
