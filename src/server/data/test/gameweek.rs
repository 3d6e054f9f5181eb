use crate::server::{data::fantasy::gameweek::GameweekRepository, error::AppError};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating an active gameweek.
///
/// Expected: Ok with an active gameweek and no end time
#[tokio::test]
async fn creates_active_gameweek() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameweekRepository::new(db);
    let gameweek = repo.create_active(3, "S2".to_string(), Utc::now()).await?;

    assert_eq!(gameweek.number, 3);
    assert_eq!(gameweek.season, "S2");
    assert!(gameweek.is_active);
    assert!(gameweek.ended_at.is_none());
    assert_eq!(repo.find_by_id(gameweek.id).await?, Some(gameweek));

    Ok(())
}

/// Tests ending every active gameweek.
///
/// Expected: Ok(1) with the gameweek inactive and stamped, ended ones untouched
#[tokio::test]
async fn ends_active_gameweeks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let old = factory::fantasy_gameweek::FantasyGameweekFactory::new(db)
        .active(false)
        .build()
        .await?;
    let current = factory::fantasy_gameweek::FantasyGameweekFactory::new(db)
        .number(2)
        .build()
        .await?;

    let repo = GameweekRepository::new(db);

    assert_eq!(repo.end_active(Utc::now()).await?, 1);
    assert!(repo.get_active().await?.is_empty());

    let ended = repo.find_by_id(current.id).await?.unwrap();
    assert!(!ended.is_active);
    assert!(ended.ended_at.is_some());

    let untouched = repo.find_by_id(old.id).await?.unwrap();
    assert_eq!(untouched.ended_at, old.ended_at);

    Ok(())
}

/// Tests ending when nothing is active.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ends_nothing_without_active_gameweek() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameweekRepository::new(db);

    assert_eq!(repo.end_active(Utc::now()).await?, 0);

    Ok(())
}
