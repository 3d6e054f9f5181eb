use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub display_name: Option<String>,
    pub team: Option<String>,
    pub division: Option<String>,
    pub national_team: Option<String>,
    pub rating: i32,
    pub suspended: bool,
    pub semi: bool,
    pub hall_of_fame: String,
    pub management: String,
    pub second_career: bool,
    pub gk_mode: bool,
    pub country: Option<String>,
    /// Fantasy price in millions, as decimal text.
    pub fantasy_price: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fantasy_selection::Entity")]
    FantasySelection,
}

impl Related<super::fantasy_selection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasySelection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
