use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyGameweek::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyGameweek::Id))
                    .col(integer(FantasyGameweek::Number))
                    .col(string(FantasyGameweek::Season))
                    .col(boolean(FantasyGameweek::IsActive).default(false))
                    .col(
                        timestamp(FantasyGameweek::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(FantasyGameweek::EndedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyGameweek::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FantasyGameweek {
    Table,
    Id,
    Number,
    Season,
    IsActive,
    StartedAt,
    EndedAt,
}
