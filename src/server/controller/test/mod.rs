use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::util::ServiceExt;

use crate::server::{
    middleware::api_key::API_KEY_HEADER, router::router, rules::league::test_league,
    service::identity::StaticIdentityResolver, state::AppState,
};

mod player;

const API_KEY: &str = "secret";

async fn setup() -> TestContext {
    TestBuilder::new().with_fantasy_tables().build().await.unwrap()
}

fn app(test: &TestContext, api_key: Option<&str>) -> Router {
    let identity = StaticIdentityResolver::new().with_user("striker", 4242);

    router(AppState::new(
        test.db.as_ref().unwrap().clone(),
        Arc::new(identity),
        Arc::new(test_league()),
        api_key.map(str::to_string),
    ))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expected: health check answers without a key even when one is configured
#[tokio::test]
async fn health_is_open() {
    let test = setup().await;

    let (status, body) = send(app(&test, Some(API_KEY)), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "API is running");
}

/// Expected: configured key is enforced on data routes
#[tokio::test]
async fn rejects_missing_or_wrong_api_key() {
    let test = setup().await;

    let (status, body) = send(app(&test, Some(API_KEY)), get("/players")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let request = Request::builder()
        .uri("/players")
        .header(API_KEY_HEADER, "wrong")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(&test, Some(API_KEY)), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/players")
        .header(API_KEY_HEADER, API_KEY)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(&test, Some(API_KEY)), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

/// Expected: without a configured key every route is open
#[tokio::test]
async fn no_key_configured_leaves_api_open() {
    let test = setup().await;

    let (status, _) = send(app(&test, None), get("/players")).await;

    assert_eq!(status, StatusCode::OK);
}
