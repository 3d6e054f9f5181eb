use axum::http::StatusCode;
use serde_json::json;
use test_utils::factory::player::PlayerFactory;

use super::{app, get, json_request, send, setup};

/// Expected: created player is returned with a derived division and 201
#[tokio::test]
async fn creates_player_with_derived_division() {
    let test = setup().await;

    let (status, body) = send(
        app(&test, None),
        json_request(
            "POST",
            "/player",
            json!({ "userid": "101", "team": "bramley city", "rating": 72 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["userid"], 101);
    assert_eq!(body["team"], "Bramley City");
    assert_eq!(body["division"], "A");
    assert_eq!(body["rating"], 72);
    assert_eq!(body["fantasy_price"], 5.0);
}

/// Expected: unknown team is rejected with 400 and nothing is stored
#[tokio::test]
async fn rejects_unknown_team() {
    let test = setup().await;

    let (status, body) = send(
        app(&test, None),
        json_request("POST", "/player", json!({ "userid": 101, "team": "Nowhere FC" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = send(app(&test, None), get("/player/101")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: creating the same id twice conflicts
#[tokio::test]
async fn duplicate_create_conflicts() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    PlayerFactory::new(db).user_id(101).build().await.unwrap();

    let (status, _) = send(
        app(&test, None),
        json_request("POST", "/player", json!({ "userid": 101 })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

/// Expected: lookup of an absent player is 404, a non-numeric id is 400
#[tokio::test]
async fn get_player_errors() {
    let test = setup().await;

    let (status, body) = send(app(&test, None), get("/player/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player with UserId 999 not found.");

    let (status, _) = send(app(&test, None), get("/player/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Expected: patch applies only supplied fields and recomputes the division
#[tokio::test]
async fn patch_updates_supplied_fields() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    PlayerFactory::new(db)
        .user_id(101)
        .team("Ashford United")
        .division("A")
        .rating(60)
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        app(&test, None),
        json_request(
            "PATCH",
            "/player/101",
            json!({ "team": "Glenholm FC", "hof": "Mid" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team"], "Glenholm FC");
    assert_eq!(body["division"], "C");
    assert_eq!(body["hof"], "Mid");
    assert_eq!(body["rating"], 60);
}

/// Expected: delete answers success, a second delete is 404
#[tokio::test]
async fn deletes_player() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    PlayerFactory::new(db).user_id(101).build().await.unwrap();

    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri("/player/101")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, body) = send(app(&test, None), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri("/player/101")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _) = send(app(&test, None), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: players listed by rating, team filter is case-insensitive
#[tokio::test]
async fn lists_players_by_rating_and_team() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    PlayerFactory::new(db)
        .user_id(1)
        .team("Harrow Vale")
        .rating(40)
        .build()
        .await
        .unwrap();
    PlayerFactory::new(db)
        .user_id(2)
        .team("Harrow Vale")
        .rating(90)
        .build()
        .await
        .unwrap();
    PlayerFactory::new(db)
        .user_id(3)
        .team("Eastwick Town")
        .rating(70)
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(&test, None), get("/players")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["userid"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 1]);

    let (status, body) = send(app(&test, None), get("/team/harrow%20vale")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["players"].as_array().unwrap().len(), 2);
}
