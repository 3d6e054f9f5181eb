use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fantasy_selection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fantasy_team_id: i32,
    pub player_id: i64,
    pub position: String,
    pub is_captain: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::FantasyTeamId",
        to = "super::fantasy_team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FantasyTeam,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::UserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::fantasy_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyTeam.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
