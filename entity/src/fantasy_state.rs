//! Single-row table pointing at the currently active gameweek.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_state")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub active_gameweek_id: Option<i32>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fantasy_gameweek::Entity",
        from = "Column::ActiveGameweekId",
        to = "super::fantasy_gameweek::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    FantasyGameweek,
}

impl Related<super::fantasy_gameweek::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyGameweek.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
