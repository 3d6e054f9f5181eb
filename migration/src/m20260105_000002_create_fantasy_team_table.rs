use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyTeam::Id))
                    .col(string_uniq(FantasyTeam::OwnerDiscordId))
                    .col(string(FantasyTeam::TeamName))
                    .col(string(FantasyTeam::Budget))
                    .col(big_integer(FantasyTeam::TotalPoints).default(0))
                    .col(
                        timestamp(FantasyTeam::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FantasyTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FantasyTeam {
    Table,
    Id,
    OwnerDiscordId,
    TeamName,
    Budget,
    TotalPoints,
    CreatedAt,
}
