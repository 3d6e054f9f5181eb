use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_player_table::Player,
    m20260105_000002_create_fantasy_team_table::FantasyTeam,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasySelection::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasySelection::Id))
                    .col(integer(FantasySelection::FantasyTeamId))
                    .col(big_integer(FantasySelection::PlayerId))
                    .col(string(FantasySelection::Position))
                    .col(boolean(FantasySelection::IsCaptain).default(false))
                    .col(
                        timestamp(FantasySelection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fantasy_selection_team_id")
                            .from(FantasySelection::Table, FantasySelection::FantasyTeamId)
                            .to(FantasyTeam::Table, FantasyTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fantasy_selection_player_id")
                            .from(FantasySelection::Table, FantasySelection::PlayerId)
                            .to(Player::Table, Player::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A player may be picked at most once per fantasy team
        manager
            .create_index(
                Index::create()
                    .name("idx_fantasy_selection_team_player")
                    .table(FantasySelection::Table)
                    .col(FantasySelection::FantasyTeamId)
                    .col(FantasySelection::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_fantasy_selection_team_player")
                    .table(FantasySelection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FantasySelection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FantasySelection {
    Table,
    Id,
    FantasyTeamId,
    PlayerId,
    Position,
    IsCaptain,
    CreatedAt,
}
