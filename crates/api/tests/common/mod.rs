#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use classbook_api::config::ServerConfig;
use classbook_api::router::build_app_router;
use classbook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
    }
}

/// Build the application router exactly as `main.rs` does, over `pool`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an urlencoded form body, the way the HTML forms submit.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 303 redirect and return its `Location`.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Seeding through the HTTP surface
// ---------------------------------------------------------------------------

/// Create a group and return its id by reading back the month's group list.
pub async fn add_group(pool: &SqlitePool, name: &str, month: i64) -> i64 {
    let response = post_form(
        build_test_app(pool.clone()),
        "/add_group",
        &format!("name={name}&month={month}"),
    )
    .await;
    assert_eq!(redirect_location(&response), format!("/groups/{month}"));

    let json = body_json(get(build_test_app(pool.clone()), &format!("/groups/{month}")).await).await;
    json["data"]["groups"]
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["name"] == name)
        .and_then(|g| g["id"].as_i64())
        .expect("created group missing from list")
}

/// Load the month sheet JSON (`data` payload) for a group.
pub async fn month_sheet(pool: &SqlitePool, month: i64, group_id: i64) -> serde_json::Value {
    let response = get(
        build_test_app(pool.clone()),
        &format!("/month/{month}/{group_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

pub async fn add_student(pool: &SqlitePool, name: &str, fee: i64, month: i64, group_id: i64) {
    let response = post_form(
        build_test_app(pool.clone()),
        "/add_student",
        &format!("name={name}&fee={fee}&month={month}&group_id={group_id}"),
    )
    .await;
    assert_eq!(
        redirect_location(&response),
        format!("/month/{month}/{group_id}")
    );
}

pub async fn add_lesson(pool: &SqlitePool, month: i64, group_id: i64, date: &str) {
    let response = post_form(
        build_test_app(pool.clone()),
        "/add_lesson",
        &format!("month={month}&group_id={group_id}&lesson_date={date}"),
    )
    .await;
    assert_eq!(
        redirect_location(&response),
        format!("/month/{month}/{group_id}")
    );
}
