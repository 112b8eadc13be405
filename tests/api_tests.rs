//! Integration tests driving the assembled router.
//!
//! Each test builds an isolated state (own store, own config) and sends
//! requests with `tower::ServiceExt::oneshot`, so tests run in parallel
//! without sharing registry contents.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use roster::config::AppConfig;
use roster::readiness::ReadinessCheck;
use roster::routes::create_router;
use roster::state::AppState;
use roster::store::UserStore;

/// Router over a store seeded with the standard demo users.
async fn test_app() -> Router {
    let users = UserStore::new();
    users.create("Alice", "alice@example.com").await;
    users.create("Bob", "bob@example.com").await;
    create_router(AppState::new(AppConfig::default(), users))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_returns_discovery_document() {
    let (status, body) = get(test_app().await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["api"], "/api");
    assert!(body["message"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_returns_healthy_status() {
    let (status, body) = get(test_app().await, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn health_timestamp_is_rfc3339() {
    let (_, body) = get(test_app().await, "/health").await;

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn ready_returns_true_with_no_failing_checks() {
    let (status, body) = get(test_app().await, "/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ready": true }));
}

#[tokio::test]
async fn ready_returns_503_when_a_check_fails() {
    struct AlwaysDown;

    #[async_trait::async_trait]
    impl ReadinessCheck for AlwaysDown {
        fn name(&self) -> &str {
            "always-down"
        }

        async fn check(&self) -> bool {
            false
        }
    }

    let state = AppState::new(AppConfig::default(), UserStore::new())
        .with_readiness_checks(vec![Box::new(AlwaysDown)]);
    let (status, body) = get(create_router(state), "/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "ready": false }));
}

#[tokio::test]
async fn live_always_returns_200() {
    let (status, body) = get(test_app().await, "/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "alive": true }));
}

#[tokio::test]
async fn health_responses_are_not_cacheable() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

#[tokio::test]
async fn list_users_returns_seeded_users_in_order() {
    let (status, body) = get(test_app().await, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Alice");
    assert_eq!(users[1]["name"], "Bob");
}

#[tokio::test]
async fn get_user_by_id_returns_user() {
    let (status, body) = get(test_app().await, "/api/users/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["user"],
        json!({ "id": 1, "name": "Alice", "email": "alice@example.com" })
    );
}

#[tokio::test]
async fn get_unknown_user_returns_404() {
    let (status, body) = get(test_app().await, "/api/users/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn get_user_with_non_numeric_id_returns_404() {
    let (status, body) = get(test_app().await, "/api/users/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn create_user_returns_201_with_next_id() {
    let app = test_app().await;

    let (status, body) = post_json(
        app.clone(),
        "/api/users",
        json!({ "name": "Charlie", "email": "charlie@example.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["user"],
        json!({ "id": 3, "name": "Charlie", "email": "charlie@example.com" })
    );

    // Created user is appended last and visible in subsequent reads
    let (_, body) = get(app.clone(), "/api/users").await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2]["name"], "Charlie");

    let (status, body) = get(app, "/api/users/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "charlie@example.com");
}

#[tokio::test]
async fn create_user_rejects_missing_or_empty_fields() {
    let cases = [
        json!({}),
        json!({ "name": "Test" }),
        json!({ "email": "test@example.com" }),
        json!({ "name": "", "email": "test@example.com" }),
        json!({ "name": "Test", "email": "" }),
        json!({ "name": "", "email": "" }),
    ];

    for case in cases {
        let (status, body) = post_json(test_app().await, "/api/users", case.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {case}");
        assert_eq!(body, json!({ "error": "Missing name or email" }));
    }
}

#[tokio::test]
async fn unmatched_path_returns_uniform_404() {
    let (status, body) = get(test_app().await, "/nope/nothing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn unmatched_method_returns_uniform_404() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Not Found" }));
}
