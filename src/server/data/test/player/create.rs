use super::*;

/// Tests creating a player with only an id.
///
/// Verifies that unset attributes take the column defaults: rating 0, no flags,
/// `None` Hall of Fame and management, and a 5.0m fantasy price.
///
/// Expected: Ok with a default player
#[tokio::test]
async fn creates_player_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParam {
            user_id: 42,
            ..Default::default()
        })
        .await?;

    assert_eq!(player.user_id, 42);
    assert_eq!(player.rating, 0);
    assert!(!player.suspended);
    assert_eq!(player.hall_of_fame, HallOfFame::None);
    assert_eq!(player.management, ManagementRole::None);
    assert_eq!(player.fantasy_price, Decimal::new(50, 1));
    assert_eq!(player.team, None);

    Ok(())
}

/// Tests creating a player with every attribute supplied.
///
/// Expected: Ok with the supplied values stored
#[tokio::test]
async fn creates_player_with_attributes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParam {
            user_id: 7,
            display_name: Some("Striker".to_string()),
            team: Some("Ashford United".to_string()),
            division: Some("A".to_string()),
            rating: Some(88),
            hall_of_fame: Some(HallOfFame::Att),
            management: Some(ManagementRole::TeamOwner),
            country: Some("England".to_string()),
            fantasy_price: Some(Decimal::new(125, 1)),
            ..Default::default()
        })
        .await?;

    let stored = repo.find_by_id(7).await?.unwrap();
    assert_eq!(stored, player);
    assert_eq!(stored.rating, 88);
    assert_eq!(stored.division.as_deref(), Some("A"));
    assert_eq!(stored.hall_of_fame, HallOfFame::Att);
    assert_eq!(stored.management, ManagementRole::TeamOwner);
    assert_eq!(stored.fantasy_price, Decimal::new(125, 1));

    Ok(())
}

/// Tests that a duplicate id is rejected by the primary key.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let result = repo
        .create(CreatePlayerParam {
            user_id: existing.user_id as u64,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
