//! Shared helpers for the API integration tests.
//!
//! Every app is backed by JSON documents in a fresh temporary directory.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use folio_api::auth::jwt::JwtConfig;
use folio_api::auth::password::hash_password;
use folio_api::config::{AdminAuthConfig, ServerConfig, StorageConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::Stores;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

/// A router plus the directory holding its documents. The directory is
/// removed when the value is dropped.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(dir: &TempDir, admin: Option<AdminAuthConfig>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig::Json {
            data_dir: dir.path().to_path_buf(),
        },
        admin,
    }
}

fn build(admin: Option<AdminAuthConfig>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, admin);
    let state = AppState {
        stores: Stores::json_files(dir.path()),
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state, &config),
        dir,
    }
}

/// App with admin auth disabled: every operation is open.
pub fn build_test_app() -> TestApp {
    build(None)
}

/// App that requires an admin token for admin operations.
pub fn build_secured_app() -> TestApp {
    build(Some(AdminAuthConfig {
        password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 15,
        },
    }))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Body>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(body.unwrap_or_else(Body::empty)).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: &Router, uri: &str, json: Value) -> Response {
    send(app, Method::POST, uri, Some(Body::from(json.to_string())), None).await
}

pub async fn put_json(app: &Router, uri: &str, json: Value) -> Response {
    send(app, Method::PUT, uri, Some(Body::from(json.to_string())), None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

/// Send raw bytes as a JSON body (for malformed-body tests).
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &'static str) -> Response {
    send(app, method, uri, Some(Body::from(raw)), None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
