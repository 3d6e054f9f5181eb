//! Player factory for creating test roster entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db)
///     .user_id(1_000_001)
///     .team("Bramley City")
///     .rating(80)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    display_name: Option<String>,
    team: Option<String>,
    division: Option<String>,
    rating: i32,
    fantasy_price: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `1_000_000 + {id}`
    /// - display_name: `"Player{id}"`
    /// - no team or division
    /// - rating: `50`
    /// - price: `5.0` million
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: 1_000_000 + id as i64,
            display_name: Some(format!("Player{}", id)),
            team: None,
            division: None,
            rating: 50,
            fantasy_price: "5.0".to_string(),
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn display_name(mut self, name: Option<&str>) -> Self {
        self.display_name = name.map(str::to_string);
        self
    }

    /// Sets the team. The division is not derived; set it explicitly if needed.
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the fantasy price in millions, written as decimal text such as `"7.5"`.
    pub fn price(mut self, price: &str) -> Self {
        self.fantasy_price = price.to_string();
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        entity::player::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            display_name: ActiveValue::Set(self.display_name),
            team: ActiveValue::Set(self.team),
            division: ActiveValue::Set(self.division),
            national_team: ActiveValue::Set(None),
            rating: ActiveValue::Set(self.rating),
            suspended: ActiveValue::Set(false),
            semi: ActiveValue::Set(false),
            hall_of_fame: ActiveValue::Set("None".to_string()),
            management: ActiveValue::Set("None".to_string()),
            second_career: ActiveValue::Set(false),
            gk_mode: ActiveValue::Set(false),
            country: ActiveValue::Set(None),
            fantasy_price: ActiveValue::Set(self.fantasy_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a given fantasy price in millions.
pub async fn create_player_with_price(
    db: &DatabaseConnection,
    price: &str,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).price(price).build().await
}
