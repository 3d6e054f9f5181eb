use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_fantasy_gameweek_table::FantasyGameweek;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyPlayerStat::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyPlayerStat::Id))
                    .col(integer(FantasyPlayerStat::GameweekId))
                    .col(big_integer(FantasyPlayerStat::PlayerId))
                    .col(string(FantasyPlayerStat::Position))
                    .col(integer(FantasyPlayerStat::Goals).default(0))
                    .col(integer(FantasyPlayerStat::Assists).default(0))
                    .col(boolean(FantasyPlayerStat::CleanSheet).default(false))
                    .col(integer(FantasyPlayerStat::Saves).default(0))
                    .col(boolean(FantasyPlayerStat::Motm).default(false))
                    .col(boolean(FantasyPlayerStat::YellowCard).default(false))
                    .col(boolean(FantasyPlayerStat::RedCard).default(false))
                    .col(integer(FantasyPlayerStat::Points))
                    .col(
                        timestamp(FantasyPlayerStat::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fantasy_player_stat_gameweek_id")
                            .from(FantasyPlayerStat::Table, FantasyPlayerStat::GameweekId)
                            .to(FantasyGameweek::Table, FantasyGameweek::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: repeated stat entries for the same player are kept
        manager
            .create_index(
                Index::create()
                    .name("idx_fantasy_player_stat_gameweek_player")
                    .table(FantasyPlayerStat::Table)
                    .col(FantasyPlayerStat::GameweekId)
                    .col(FantasyPlayerStat::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_fantasy_player_stat_gameweek_player")
                    .table(FantasyPlayerStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FantasyPlayerStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FantasyPlayerStat {
    Table,
    Id,
    GameweekId,
    PlayerId,
    Position,
    Goals,
    Assists,
    CleanSheet,
    Saves,
    Motm,
    YellowCard,
    RedCard,
    Points,
    CreatedAt,
}
