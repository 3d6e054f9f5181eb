use super::*;

/// Tests updating the fantasy price.
///
/// Expected: Ok(true) and the new price is stored
#[tokio::test]
async fn sets_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.set_fantasy_price(created.user_id as u64, Decimal::new(425, 2)).await?);
    let player = repo.find_by_id(created.user_id as u64).await?.unwrap();
    assert_eq!(player.fantasy_price, Decimal::new(425, 2));

    Ok(())
}

/// Tests setting the price of an unknown player.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.set_fantasy_price(1, Decimal::new(60, 1)).await?);

    Ok(())
}
