//! Per-gameweek player stat repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::gameweek::{PlayerStat, StatLine},
    util::parse::player_id_to_db,
};

pub struct PlayerStatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerStatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a stat row with its frozen points value.
    ///
    /// Rows are never deduplicated; a second call for the same player and gameweek
    /// stores a second row.
    pub async fn create(
        &self,
        gameweek_id: i32,
        player_id: u64,
        line: &StatLine,
        points: i32,
    ) -> Result<PlayerStat, AppError> {
        let entity = entity::fantasy_player_stat::ActiveModel {
            gameweek_id: ActiveValue::Set(gameweek_id),
            player_id: ActiveValue::Set(player_id_to_db(player_id)?),
            position: ActiveValue::Set(line.position.code().to_string()),
            goals: ActiveValue::Set(count_column(line.goals)),
            assists: ActiveValue::Set(count_column(line.assists)),
            clean_sheet: ActiveValue::Set(line.clean_sheet),
            saves: ActiveValue::Set(count_column(line.saves)),
            motm: ActiveValue::Set(line.motm),
            yellow_card: ActiveValue::Set(line.yellow_card),
            red_card: ActiveValue::Set(line.red_card),
            points: ActiveValue::Set(points),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PlayerStat::from_entity(entity)
    }

    /// Gets every stat row of a gameweek in insertion order.
    pub async fn get_by_gameweek(&self, gameweek_id: i32) -> Result<Vec<PlayerStat>, AppError> {
        entity::prelude::FantasyPlayerStat::find()
            .filter(entity::fantasy_player_stat::Column::GameweekId.eq(gameweek_id))
            .order_by_asc(entity::fantasy_player_stat::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerStat::from_entity)
            .collect()
    }

    /// Gets the stat rows of a gameweek for the given players.
    pub async fn get_by_gameweek_and_players(
        &self,
        gameweek_id: i32,
        player_ids: &[u64],
    ) -> Result<Vec<PlayerStat>, AppError> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = player_ids
            .iter()
            .map(|id| player_id_to_db(*id))
            .collect::<Result<Vec<_>, _>>()?;

        entity::prelude::FantasyPlayerStat::find()
            .filter(entity::fantasy_player_stat::Column::GameweekId.eq(gameweek_id))
            .filter(entity::fantasy_player_stat::Column::PlayerId.is_in(ids))
            .order_by_asc(entity::fantasy_player_stat::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlayerStat::from_entity)
            .collect()
    }
}

fn count_column(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
