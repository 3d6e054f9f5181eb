use super::*;

/// Tests creating a fantasy team.
///
/// Expected: Ok with the given budget and zero points
#[tokio::test]
async fn creates_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FantasyTeamRepository::new(db);
    let team = repo.create(111, "Foo".to_string(), Decimal::new(900, 1)).await?;

    assert_eq!(team.owner_discord_id, 111);
    assert_eq!(team.team_name, "Foo");
    assert_eq!(team.budget, Decimal::new(900, 1));
    assert_eq!(team.total_points, 0);

    Ok(())
}

/// Tests that an owner cannot hold two teams.
///
/// Expected: Err(AppError::DbErr) from the unique owner constraint, which maps onto
/// `FantasyError::AlreadyRegistered` for a registration that lost the race
#[tokio::test]
async fn rejects_second_team_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FantasyTeamRepository::new(db);
    repo.create(111, "Foo".to_string(), Decimal::new(900, 1)).await?;
    let result = repo.create(111, "Bar".to_string(), Decimal::new(900, 1)).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::DbErr(_)));

    let mapped = err.or_on_unique_violation(FantasyError::AlreadyRegistered);
    assert!(matches!(
        mapped,
        AppError::FantasyErr(FantasyError::AlreadyRegistered)
    ));
    assert_eq!(mapped.kind(), ErrorKind::Conflict);

    Ok(())
}

/// Tests that team names may repeat across owners.
///
/// Expected: Ok for both teams
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FantasyTeamRepository::new(db);
    repo.create(1, "Same".to_string(), Decimal::new(900, 1)).await?;
    repo.create(2, "Same".to_string(), Decimal::new(900, 1)).await?;

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
