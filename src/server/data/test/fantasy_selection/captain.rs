use super::*;

/// Tests moving the captaincy from one selection to another.
///
/// Expected: Ok with exactly one captain, the new one
#[tokio::test]
async fn moves_captaincy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let team = factory::create_fantasy_team(db).await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;
    factory::fantasy_selection::FantasySelectionFactory::new(db, team.id, first.user_id)
        .captain(true)
        .build()
        .await?;
    let target = factory::create_selection(db, team.id, second.user_id, "DEF").await?;

    let repo = FantasySelectionRepository::new(db);
    repo.clear_captain(team.id).await?;
    assert!(repo.set_captain(target.id).await?);

    let captains: Vec<u64> = repo
        .get_by_team(team.id)
        .await?
        .into_iter()
        .filter(|selection| selection.is_captain)
        .map(|selection| selection.player_id)
        .collect();
    assert_eq!(captains, vec![second.user_id as u64]);

    Ok(())
}

/// Tests that clearing the captain only touches the given team.
///
/// Expected: Ok with the other team's captain untouched
#[tokio::test]
async fn clears_only_own_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    let mine = factory::create_fantasy_team(db).await?;
    let theirs = factory::create_fantasy_team(db).await?;
    factory::fantasy_selection::FantasySelectionFactory::new(db, mine.id, player.user_id)
        .captain(true)
        .build()
        .await?;
    factory::fantasy_selection::FantasySelectionFactory::new(db, theirs.id, player.user_id)
        .captain(true)
        .build()
        .await?;

    let repo = FantasySelectionRepository::new(db);
    assert_eq!(repo.clear_captain(mine.id).await?, 1);

    assert!(repo.get_by_team(theirs.id).await?[0].is_captain);
    assert!(!repo.get_by_team(mine.id).await?[0].is_captain);

    Ok(())
}
