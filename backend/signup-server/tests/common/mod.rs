#![allow(dead_code)]

//! Test infrastructure for signup-server API tests

use signup_config::{Environment, HandlerConfig};
use signup_server::AppState;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    signup_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, optionally with strict PATCH semantics
pub async fn create_test_app_state(strict_update: bool) -> AppState {
    AppState {
        pool: create_test_pool().await,
        query_timeout: Duration::from_secs(3),
        handler: HandlerConfig {
            strict_update,
            ..HandlerConfig::default()
        },
        environment: Environment::Development,
    }
}

/// Send one request through a fresh router
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Create a user through the API and return its id
pub async fn create_user(app: &Router, fullname: &str, email: &str) -> i64 {
    let body = serde_json::json!({ "fullname": fullname, "email": email }).to_string();
    let response = send(app, "POST", "/v1/signup", Some(&body)).await;
    let json = body_json(response).await;

    json["user"]["id"].as_i64().expect("created user has an id")
}
