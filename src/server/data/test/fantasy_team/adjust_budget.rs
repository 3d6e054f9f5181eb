use super::*;

/// Tests deducting and refunding budget.
///
/// Expected: Ok with the budget moving by exactly the deltas
#[tokio::test]
async fn applies_budget_deltas() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_fantasy_team(db).await?;

    let repo = FantasyTeamRepository::new(db);

    let after_pick = repo.adjust_budget(created.id, Decimal::new(-55, 1)).await?;
    assert_eq!(after_pick.budget, Decimal::new(845, 1));

    let after_drop = repo.adjust_budget(created.id, Decimal::new(55, 1)).await?;
    assert_eq!(after_drop.budget, Decimal::new(900, 1));

    Ok(())
}

/// Tests overwriting the budget.
///
/// Expected: Ok with the new budget
#[tokio::test]
async fn sets_budget() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::fantasy_team::FantasyTeamFactory::new(db)
        .budget("1.2")
        .build()
        .await?;

    let repo = FantasyTeamRepository::new(db);
    let team = repo.set_budget(created.id, Decimal::new(8755, 2)).await?;

    assert_eq!(team.budget, Decimal::new(8755, 2));

    Ok(())
}

/// Tests that points accumulate rather than overwrite.
///
/// Expected: Ok with 10 + 5 = 15 points
#[tokio::test]
async fn accumulates_points() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::fantasy_team::FantasyTeamFactory::new(db)
        .total_points(10)
        .build()
        .await?;

    let repo = FantasyTeamRepository::new(db);
    let team = repo.add_points(created.id, 5).await?;

    assert_eq!(team.total_points, 15);

    Ok(())
}

/// Tests adjusting a team that does not exist.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FantasyTeamRepository::new(db);
    let result = repo.adjust_budget(99, Decimal::ONE).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
