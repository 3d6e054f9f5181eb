use crate::server::{
    data::fantasy::player_stat::PlayerStatRepository,
    error::AppError,
    model::{
        fantasy::FantasyPosition,
        gameweek::StatLine,
    },
};
use test_utils::{builder::TestBuilder, factory};

/// Tests storing a stat line with its points.
///
/// Expected: Ok with every field round-tripped
#[tokio::test]
async fn creates_stat_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gameweek = factory::create_active_gameweek(db).await?;
    let line = StatLine {
        goals: 1,
        saves: 7,
        clean_sheet: true,
        yellow_card: true,
        ..StatLine::appearance(FantasyPosition::Gk)
    };

    let repo = PlayerStatRepository::new(db);
    let stat = repo.create(gameweek.id, 77, &line, 13).await?;

    assert_eq!(stat.gameweek_id, gameweek.id);
    assert_eq!(stat.player_id, 77);
    assert_eq!(stat.line, line);
    assert_eq!(stat.points, 13);

    Ok(())
}

/// Tests that repeated entries for one player are all kept.
///
/// Expected: Ok with two rows for the same player and gameweek
#[tokio::test]
async fn keeps_duplicate_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gameweek = factory::create_active_gameweek(db).await?;
    let line = StatLine::appearance(FantasyPosition::Mid);

    let repo = PlayerStatRepository::new(db);
    repo.create(gameweek.id, 5, &line, 2).await?;
    repo.create(gameweek.id, 5, &line, 2).await?;

    let rows = repo.get_by_gameweek_and_players(gameweek.id, &[5]).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests filtering by gameweek and player set.
///
/// Expected: Ok with only the requested player's row from the requested gameweek
#[tokio::test]
async fn filters_by_gameweek_and_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let current = factory::create_active_gameweek(db).await?;
    let previous = factory::fantasy_gameweek::FantasyGameweekFactory::new(db)
        .active(false)
        .build()
        .await?;
    let line = StatLine::appearance(FantasyPosition::Att);

    let repo = PlayerStatRepository::new(db);
    repo.create(current.id, 1, &line, 2).await?;
    repo.create(current.id, 2, &line, 2).await?;
    repo.create(previous.id, 1, &line, 2).await?;

    let rows = repo.get_by_gameweek_and_players(current.id, &[1]).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_id, 1);
    assert_eq!(rows[0].gameweek_id, current.id);

    assert!(repo
        .get_by_gameweek_and_players(current.id, &[])
        .await?
        .is_empty());
    assert_eq!(repo.get_by_gameweek(current.id).await?.len(), 2);

    Ok(())
}
