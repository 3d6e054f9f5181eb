use super::*;

/// Tests finding an existing player.
///
/// Expected: Ok(Some) with the stored attributes
#[tokio::test]
async fn finds_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::player::PlayerFactory::new(db)
        .team("Glenholm FC")
        .division("B")
        .rating(73)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo.find_by_id(created.user_id as u64).await?.unwrap();

    assert_eq!(player.team.as_deref(), Some("Glenholm FC"));
    assert_eq!(player.division.as_deref(), Some("B"));
    assert_eq!(player.rating, 73);

    Ok(())
}

/// Tests looking up an id with no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}

/// Tests that ids beyond the column range are rejected rather than wrapped.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_out_of_range_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.find_by_id(u64::MAX).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
