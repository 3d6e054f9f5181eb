//! Fantasy gameweek repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter,
};

use crate::server::{error::AppError, model::gameweek::Gameweek};

pub struct GameweekRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameweekRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active gameweek.
    ///
    /// Does not touch other gameweeks; callers deactivate the previous one in the same
    /// transaction.
    pub async fn create_active(
        &self,
        number: i32,
        season: String,
        started_at: DateTime<Utc>,
    ) -> Result<Gameweek, AppError> {
        let entity = entity::fantasy_gameweek::ActiveModel {
            number: ActiveValue::Set(number),
            season: ActiveValue::Set(season),
            is_active: ActiveValue::Set(true),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Gameweek::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gameweek>, AppError> {
        let entity = entity::prelude::FantasyGameweek::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Gameweek::from_entity))
    }

    /// Ends every active gameweek at `ended_at`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of gameweeks ended
    pub async fn end_active(&self, ended_at: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::FantasyGameweek::update_many()
            .col_expr(entity::fantasy_gameweek::Column::IsActive, Expr::value(false))
            .col_expr(
                entity::fantasy_gameweek::Column::EndedAt,
                Expr::value(Some(ended_at)),
            )
            .filter(entity::fantasy_gameweek::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every gameweek flagged active, oldest first.
    #[cfg(test)]
    pub async fn get_active(&self) -> Result<Vec<Gameweek>, AppError> {
        use sea_orm::QueryOrder;

        let entities = entity::prelude::FantasyGameweek::find()
            .filter(entity::fantasy_gameweek::Column::IsActive.eq(true))
            .order_by_asc(entity::fantasy_gameweek::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Gameweek::from_entity).collect())
    }
}
