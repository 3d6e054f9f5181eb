use super::*;

/// Tests deleting a selection.
///
/// Expected: Ok(true) then Ok(false) for the same id
#[tokio::test]
async fn deletes_selection_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, team, selection) = factory::helpers::create_team_with_selection(db, "GK").await?;

    let repo = FantasySelectionRepository::new(db);

    assert!(repo.delete(selection.id).await?);
    assert!(!repo.delete(selection.id).await?);
    assert!(repo.get_by_team(team.id).await?.is_empty());

    Ok(())
}
