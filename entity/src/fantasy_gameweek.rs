use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_gameweek")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: i32,
    pub season: String,
    pub is_active: bool,
    pub started_at: DateTimeUtc,
    pub ended_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fantasy_player_stat::Entity")]
    FantasyPlayerStat,
}

impl Related<super::fantasy_player_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyPlayerStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
