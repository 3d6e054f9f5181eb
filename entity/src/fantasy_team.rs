use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub owner_discord_id: String,
    pub team_name: String,
    /// Remaining budget in millions, as decimal text.
    pub budget: String,
    pub total_points: i64,
    pub created_at: DateTimeUtc,
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
