pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_player_table;
mod m20260105_000002_create_fantasy_team_table;
mod m20260105_000003_create_fantasy_selection_table;
mod m20260105_000004_create_fantasy_gameweek_table;
mod m20260105_000005_create_fantasy_player_stat_table;
mod m20260105_000006_create_fantasy_state_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_player_table::Migration),
            Box::new(m20260105_000002_create_fantasy_team_table::Migration),
            Box::new(m20260105_000003_create_fantasy_selection_table::Migration),
            Box::new(m20260105_000004_create_fantasy_gameweek_table::Migration),
            Box::new(m20260105_000005_create_fantasy_player_stat_table::Migration),
            Box::new(m20260105_000006_create_fantasy_state_table::Migration),
        ]
    }
}
