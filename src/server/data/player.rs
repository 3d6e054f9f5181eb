//! Player roster repository.
//!
//! Handles reads and writes of league player records. Team and division values are
//! expected to be canonical by the time they reach this layer; validation and division
//! derivation belong to the player service.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::player::{CreatePlayerParam, Player},
    rules::fantasy::DEFAULT_PRICE,
    util::{money::amount_to_column, parse::player_id_to_db},
};

/// Repository providing database operations for league players.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new player record, filling unset attributes with column defaults.
    ///
    /// The caller is responsible for validating rating and price; an out of range
    /// rating that slips through is replaced by the default.
    ///
    /// # Returns
    /// - `Ok(Player)` - The inserted player
    /// - `Err(AppError::DbErr)` - Insert failed, including primary key conflicts
    pub async fn create(&self, param: CreatePlayerParam) -> Result<Player, AppError> {
        let now = Utc::now();
        let rating = param
            .rating
            .and_then(|rating| i32::try_from(rating).ok())
            .unwrap_or(0);
        let price = param.fantasy_price.unwrap_or(DEFAULT_PRICE);

        let entity = entity::player::ActiveModel {
            user_id: ActiveValue::Set(player_id_to_db(param.user_id)?),
            display_name: ActiveValue::Set(param.display_name),
            team: ActiveValue::Set(param.team),
            division: ActiveValue::Set(param.division),
            national_team: ActiveValue::Set(param.national_team),
            rating: ActiveValue::Set(rating),
            suspended: ActiveValue::Set(param.suspended.unwrap_or(false)),
            semi: ActiveValue::Set(param.semi.unwrap_or(false)),
            hall_of_fame: ActiveValue::Set(param.hall_of_fame.unwrap_or_default().to_string()),
            management: ActiveValue::Set(param.management.unwrap_or_default().to_string()),
            second_career: ActiveValue::Set(param.second_career.unwrap_or(false)),
            gk_mode: ActiveValue::Set(param.gk_mode.unwrap_or(false)),
            country: ActiveValue::Set(param.country),
            fantasy_price: ActiveValue::Set(amount_to_column(price)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Finds a player by external user id.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that id
    /// - `Err(AppError)` - Query failed or stored row is corrupt
    pub async fn find_by_id(&self, user_id: u64) -> Result<Option<Player>, AppError> {
        let entity = entity::prelude::Player::find_by_id(player_id_to_db(user_id)?)
            .one(self.db)
            .await?;

        entity.map(Player::from_entity).transpose()
    }

    /// Finds every player whose id is in `user_ids`. Unknown ids are skipped.
    pub async fn find_many(&self, user_ids: &[u64]) -> Result<Vec<Player>, AppError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = user_ids
            .iter()
            .map(|id| player_id_to_db(*id))
            .collect::<Result<Vec<_>, _>>()?;

        entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Writes every mutable attribute of `player` back to its row.
    ///
    /// `created_at` is left untouched and `updated_at` is set to now.
    ///
    /// # Returns
    /// - `Ok(Player)` - The stored player after the update
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - No row with that id
    pub async fn update(&self, player: Player) -> Result<Player, AppError> {
        let entity = entity::player::ActiveModel {
            user_id: ActiveValue::Unchanged(player_id_to_db(player.user_id)?),
            display_name: ActiveValue::Set(player.display_name),
            team: ActiveValue::Set(player.team),
            division: ActiveValue::Set(player.division),
            national_team: ActiveValue::Set(player.national_team),
            rating: ActiveValue::Set(player.rating),
            suspended: ActiveValue::Set(player.suspended),
            semi: ActiveValue::Set(player.semi),
            hall_of_fame: ActiveValue::Set(player.hall_of_fame.to_string()),
            management: ActiveValue::Set(player.management.to_string()),
            second_career: ActiveValue::Set(player.second_career),
            gk_mode: ActiveValue::Set(player.gk_mode),
            country: ActiveValue::Set(player.country),
            fantasy_price: ActiveValue::Set(amount_to_column(player.fantasy_price)),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Sets the fantasy price of a player.
    ///
    /// # Returns
    /// - `Ok(true)` - Price updated
    /// - `Ok(false)` - No player with that id
    pub async fn set_fantasy_price(&self, user_id: u64, price: Decimal) -> Result<bool, AppError> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::FantasyPrice,
                Expr::value(amount_to_column(price)),
            )
            .col_expr(entity::player::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::player::Column::UserId.eq(player_id_to_db(user_id)?))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores a display name fetched from the identity provider.
    pub async fn set_display_name(&self, user_id: u64, name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::DisplayName,
                Expr::value(name.to_string()),
            )
            .col_expr(entity::player::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::player::Column::UserId.eq(player_id_to_db(user_id)?))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a player together with every fantasy selection referencing them.
    ///
    /// Budgets of affected fantasy teams are not refunded.
    ///
    /// # Returns
    /// - `Ok(true)` - Player deleted
    /// - `Ok(false)` - No player with that id
    pub async fn delete(&self, user_id: u64) -> Result<bool, AppError> {
        let id = player_id_to_db(user_id)?;

        entity::prelude::FantasySelection::delete_many()
            .filter(entity::fantasy_selection::Column::PlayerId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all players ordered by rating, highest first.
    ///
    /// Ties are broken by user id so the order is stable.
    pub async fn get_all_by_rating(&self) -> Result<Vec<Player>, AppError> {
        entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::Rating)
            .order_by_asc(entity::player::Column::UserId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Gets the players of one team ordered by rating, highest first.
    ///
    /// # Arguments
    /// - `team` - Canonical team name
    pub async fn get_by_team(&self, team: &str) -> Result<Vec<Player>, AppError> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Team.eq(team))
            .order_by_desc(entity::player::Column::Rating)
            .order_by_asc(entity::player::Column::UserId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }
}
