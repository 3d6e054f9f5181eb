//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start well above zero so generated player ids look like real external ids.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a fantasy team with one selected player.
///
/// # Returns
/// - `Ok((player, team, selection))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_selection(
    db: &DatabaseConnection,
    position: &str,
) -> Result<
    (
        entity::player::Model,
        entity::fantasy_team::Model,
        entity::fantasy_selection::Model,
    ),
    DbErr,
> {
    let player = crate::factory::player::create_player(db).await?;
    let team = crate::factory::fantasy_team::create_fantasy_team(db).await?;
    let selection = crate::factory::fantasy_selection::FantasySelectionFactory::new(
        db,
        team.id,
        player.user_id,
    )
    .position(position)
    .build()
    .await?;

    Ok((player, team, selection))
}
