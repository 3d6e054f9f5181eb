use super::*;

/// Tests leaderboard ordering by points, then name.
///
/// Expected: Ok with Alpha (30), Beta (30), Gamma (10)
#[tokio::test]
async fn orders_by_points_then_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::fantasy_team::FantasyTeamFactory::new(db)
        .team_name("Gamma")
        .total_points(10)
        .build()
        .await?;
    factory::fantasy_team::FantasyTeamFactory::new(db)
        .team_name("Beta")
        .total_points(30)
        .build()
        .await?;
    factory::fantasy_team::FantasyTeamFactory::new(db)
        .team_name("Alpha")
        .total_points(30)
        .build()
        .await?;

    let repo = FantasyTeamRepository::new(db);
    let names: Vec<String> = repo
        .get_leaderboard(10)
        .await?
        .into_iter()
        .map(|team| team.team_name)
        .collect();

    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);

    Ok(())
}

/// Tests that the limit caps the number of rows.
///
/// Expected: Ok with two teams
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..4 {
        factory::create_fantasy_team(db).await?;
    }

    let repo = FantasyTeamRepository::new(db);

    assert_eq!(repo.get_leaderboard(2).await?.len(), 2);

    Ok(())
}
