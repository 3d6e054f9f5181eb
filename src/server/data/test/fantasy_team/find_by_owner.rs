use super::*;

/// Tests finding a team by its owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn finds_team_by_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::fantasy_team::FantasyTeamFactory::new(db)
        .owner(424242)
        .build()
        .await?;

    let repo = FantasyTeamRepository::new(db);

    let team = repo.find_by_owner(424242).await?.unwrap();
    assert_eq!(team.id, created.id);
    assert!(repo.find_by_owner(1).await?.is_none());

    Ok(())
}
