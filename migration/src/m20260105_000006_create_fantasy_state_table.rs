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
                    .table(FantasyState::Table)
                    .if_not_exists()
                    .col(integer(FantasyState::Id).primary_key())
                    .col(integer_null(FantasyState::ActiveGameweekId))
                    .col(
                        timestamp(FantasyState::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fantasy_state_active_gameweek_id")
                            .from(FantasyState::Table, FantasyState::ActiveGameweekId)
                            .to(FantasyGameweek::Table, FantasyGameweek::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyState::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FantasyState {
    Table,
    Id,
    ActiveGameweekId,
    UpdatedAt,
}
