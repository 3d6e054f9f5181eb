use super::*;

/// Tests writing changed attributes back to the row.
///
/// Expected: Ok with the changes persisted and `created_at` preserved
#[tokio::test]
async fn updates_player_attributes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let mut player = repo.find_by_id(created.user_id as u64).await?.unwrap();
    player.team = Some("Harrow Vale".to_string());
    player.division = Some("B".to_string());
    player.suspended = true;
    player.management = ManagementRole::AssistantManager;

    let updated = repo.update(player).await?;

    assert_eq!(updated.team.as_deref(), Some("Harrow Vale"));
    assert!(updated.suspended);
    assert_eq!(updated.management, ManagementRole::AssistantManager);
    assert_eq!(updated.created_at, created.created_at);

    let stored = repo.find_by_id(created.user_id as u64).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests clearing optional attributes.
///
/// Expected: Ok with team and division set to NULL
#[tokio::test]
async fn clears_optional_attributes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::player::PlayerFactory::new(db)
        .team("Ashford United")
        .division("A")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let mut player = repo.find_by_id(created.user_id as u64).await?.unwrap();
    player.team = None;
    player.division = None;
    repo.update(player).await?;

    let stored = repo.find_by_id(created.user_id as u64).await?.unwrap();
    assert_eq!(stored.team, None);
    assert_eq!(stored.division, None);

    Ok(())
}
