use super::*;
use crate::server::data::fantasy::selection::FantasySelectionRepository;
use sea_orm::EntityTrait;

/// Tests deleting an existing player.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.delete(created.user_id as u64).await?);
    assert!(repo.find_by_id(created.user_id as u64).await?.is_none());

    Ok(())
}

/// Tests deleting an id with no record.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.delete(12345).await?);

    Ok(())
}

/// Tests that a deleted player's selections go with it and budgets stay untouched.
///
/// Expected: Ok with the selection removed and the team budget unchanged
#[tokio::test]
async fn removes_selections_without_refund() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (player, team, _) = factory::helpers::create_team_with_selection(db, "DEF").await?;

    let repo = PlayerRepository::new(db);
    repo.delete(player.user_id as u64).await?;

    let selections = FantasySelectionRepository::new(db).get_by_team(team.id).await?;
    assert!(selections.is_empty());

    let stored_team = entity::prelude::FantasyTeam::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_team.budget, team.budget);

    Ok(())
}
