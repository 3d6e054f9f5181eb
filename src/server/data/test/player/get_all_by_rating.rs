use super::*;

/// Tests that players come back highest rating first.
///
/// Expected: Ok with players ordered 90, 60, 10
#[tokio::test]
async fn orders_by_rating_descending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::player::PlayerFactory::new(db).rating(60).build().await?;
    factory::player::PlayerFactory::new(db).rating(10).build().await?;
    factory::player::PlayerFactory::new(db).rating(90).build().await?;

    let repo = PlayerRepository::new(db);
    let ratings: Vec<i32> = repo
        .get_all_by_rating()
        .await?
        .into_iter()
        .map(|player| player.rating)
        .collect();

    assert_eq!(ratings, vec![90, 60, 10]);

    Ok(())
}

/// Tests an empty roster.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(repo.get_all_by_rating().await?.is_empty());

    Ok(())
}
