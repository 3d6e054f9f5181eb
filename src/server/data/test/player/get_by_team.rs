use super::*;

/// Tests filtering players by team.
///
/// Expected: Ok with only the two Bramley City players, best rated first
#[tokio::test]
async fn returns_only_team_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let low = factory::player::PlayerFactory::new(db)
        .team("Bramley City")
        .rating(40)
        .build()
        .await?;
    let high = factory::player::PlayerFactory::new(db)
        .team("Bramley City")
        .rating(80)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .team("Carlton Rovers")
        .build()
        .await?;
    factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let ids: Vec<u64> = repo
        .get_by_team("Bramley City")
        .await?
        .into_iter()
        .map(|player| player.user_id)
        .collect();

    assert_eq!(ids, vec![high.user_id as u64, low.user_id as u64]);

    Ok(())
}
