//! Persistence integration tests — signup/login round trip, duplicate
//! email conflict, and watchlist idempotence, driven through the
//! router against a live PostgreSQL.
//!
//! Ignored by default since they need a database. Run with:
//!
//! ```sh
//! TEST_DATABASE_URL=postgres://localhost:5432/popcorn_test \
//!     cargo test -p popcorn_api -- --ignored
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use popcorn_api::{AppState, config::ApiConfig};
use popcorn_core::tmdb::TmdbClient;
use tower::ServiceExt;

const JWT_SECRET: &str = "persistence-test-secret";

async fn test_app() -> Router {
    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost:5432/popcorn_test".into());
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("connect to test database");
    popcorn_api::migrate(&pool).await.expect("migrations");

    let config = ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        database_url,
        jwt_secret: JWT_SECRET.into(),
        tmdb_api_key: "test-key".into(),
        tmdb_base_url: "http://127.0.0.1:1".into(),
        watch_region: "IN".into(),
    };
    let tmdb = TmdbClient::new(config.tmdb_base_url.clone(), config.tmdb_api_key.clone())
        .expect("tmdb client");
    popcorn_api::router(AppState { pool, config, tmdb })
}

async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    bearer: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = builder
        .body(Body::from(body.to_string()))
        .expect("request");
    read_json(app.clone().oneshot(req).await.expect("response")).await
}

async fn get_json(app: &Router, uri: &str, bearer: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = builder.body(Body::empty()).expect("request");
    read_json(app.clone().oneshot(req).await.expect("response")).await
}

async fn read_json(resp: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn fresh_email() -> String {
    format!("ann-{}@x.com", uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL (TEST_DATABASE_URL)"]
async fn signup_then_login_round_trips() {
    let app = test_app().await;
    let email = fresh_email();

    let (status, json) = post_json(
        &app,
        "/auth/signup",
        serde_json::json!({"name": "Ann", "email": email, "password": "secret123"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["name"], "Ann");
    assert_eq!(json["user"]["email"], email);

    let (status, json) = post_json(
        &app,
        "/auth/login",
        serde_json::json!({"email": email, "password": "secret123"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["token"].is_string());

    let (status, json) = post_json(
        &app,
        "/auth/login",
        serde_json::json!({"email": email, "password": "not-it"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Wrong password");
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL (TEST_DATABASE_URL)"]
async fn duplicate_email_is_a_conflict() {
    let app = test_app().await;
    let email = fresh_email();
    let body = serde_json::json!({"name": "Ann", "email": email, "password": "secret123"});

    let (status, _) = post_json(&app, "/auth/signup", body.clone(), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post_json(&app, "/auth/signup", body, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Email already exists");
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL (TEST_DATABASE_URL)"]
async fn watchlist_add_is_idempotent() {
    let app = test_app().await;
    let email = fresh_email();

    let (status, json) = post_json(
        &app,
        "/auth/signup",
        serde_json::json!({"name": "Ann", "email": email, "password": "secret123"}),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = json["token"].as_str().expect("token").to_string();

    let (status, json) = post_json(
        &app,
        "/watchlist/603",
        serde_json::json!({}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    // Re-adding the same id is a no-op, not a duplicate.
    let (status, json) = post_json(
        &app,
        "/watchlist/603",
        serde_json::json!({}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = get_json(&app, "/watchlist", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([603]));
}
