use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_player_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gameweek_id: i32,
    pub player_id: i64,
    pub position: String,
    pub goals: i32,
    pub assists: i32,
    pub clean_sheet: bool,
    pub saves: i32,
    pub motm: bool,
    pub yellow_card: bool,
    pub red_card: bool,
    pub points: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fantasy_gameweek::Entity",
        from = "Column::GameweekId",
        to = "super::fantasy_gameweek::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FantasyGameweek,
}

impl Related<super::fantasy_gameweek::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyGameweek.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
