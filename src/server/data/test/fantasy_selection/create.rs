use super::*;

/// Tests inserting a selection.
///
/// Expected: Ok with a non-captain selection at the chosen position
#[tokio::test]
async fn creates_selection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    let team = factory::create_fantasy_team(db).await?;

    let repo = FantasySelectionRepository::new(db);
    let selection = repo
        .create(team.id, player.user_id as u64, FantasyPosition::Att)
        .await?;

    assert_eq!(selection.fantasy_team_id, team.id);
    assert_eq!(selection.player_id, player.user_id as u64);
    assert_eq!(selection.position, FantasyPosition::Att);
    assert!(!selection.is_captain);

    let found = repo
        .find_by_team_and_player(team.id, player.user_id as u64)
        .await?;
    assert_eq!(found, Some(selection));

    Ok(())
}

/// Tests that two teams can pick the same player.
///
/// Expected: Ok for both selections
#[tokio::test]
async fn allows_same_player_in_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (player, _, _) = factory::helpers::create_team_with_selection(db, "MID").await?;
    let other = factory::create_fantasy_team(db).await?;

    let repo = FantasySelectionRepository::new(db);
    repo.create(other.id, player.user_id as u64, FantasyPosition::Mid)
        .await?;

    assert_eq!(repo.get_by_team(other.id).await?.len(), 1);

    Ok(())
}

/// Tests that a team cannot hold the same player twice.
///
/// Expected: Err(AppError::DbErr) from the unique team/player index, which maps onto
/// `FantasyError::DuplicatePlayer`
#[tokio::test]
async fn rejects_same_player_twice_in_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (player, team, _) = factory::helpers::create_team_with_selection(db, "MID").await?;
    let player_id = player.user_id as u64;

    let result = FantasySelectionRepository::new(db)
        .create(team.id, player_id, FantasyPosition::Att)
        .await;

    let mapped = result
        .unwrap_err()
        .or_on_unique_violation(FantasyError::DuplicatePlayer(player_id));
    assert!(matches!(
        mapped,
        AppError::FantasyErr(FantasyError::DuplicatePlayer(id)) if id == player_id
    ));

    Ok(())
}
