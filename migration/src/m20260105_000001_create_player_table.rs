use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(big_integer(Player::UserId).primary_key())
                    .col(string_null(Player::DisplayName))
                    .col(string_null(Player::Team))
                    .col(string_null(Player::Division))
                    .col(string_null(Player::NationalTeam))
                    .col(integer(Player::Rating).default(0))
                    .col(boolean(Player::Suspended).default(false))
                    .col(boolean(Player::Semi).default(false))
                    .col(string(Player::HallOfFame).default("None"))
                    .col(string(Player::Management).default("None"))
                    .col(boolean(Player::SecondCareer).default(false))
                    .col(boolean(Player::GkMode).default(false))
                    .col(string_null(Player::Country))
                    .col(string(Player::FantasyPrice).default("5.0"))
                    .col(
                        timestamp(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Player::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_team")
                    .table(Player::Table)
                    .col(Player::Team)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_player_team")
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    UserId,
    DisplayName,
    Team,
    Division,
    NationalTeam,
    Rating,
    Suspended,
    Semi,
    HallOfFame,
    Management,
    SecondCareer,
    GkMode,
    Country,
    FantasyPrice,
    CreatedAt,
    UpdatedAt,
}
