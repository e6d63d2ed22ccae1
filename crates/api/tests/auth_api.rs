//! Integration tests for admin login and the admin guard.

mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::{
    body_json, build_secured_app, build_test_app, get, post_json, send, ADMIN_PASSWORD,
};
use serde_json::{json, Value};

async fn login(app: &axum::Router) -> String {
    let response = post_json(app, "/api/auth/login", json!({ "password": ADMIN_PASSWORD })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["expiresAt"].as_i64().unwrap() > chrono::Utc::now().timestamp());
    json["token"].as_str().unwrap().to_string()
}

fn json_body(value: Value) -> Option<Body> {
    Some(Body::from(value.to_string()))
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = build_secured_app();
    let response = post_json(&app.router, "/api/auth/login", json!({ "password": "guess" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn login_without_configured_auth_is_bad_request() {
    let app = build_test_app();
    let response = post_json(&app.router, "/api/auth/login", json!({ "password": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Admin authentication is not configured"
    );
}

#[tokio::test]
async fn public_reads_need_no_token() {
    let app = build_secured_app();
    for uri in ["/api/projects", "/api/artworks", "/api/settings", "/health"] {
        assert_eq!(get(&app.router, uri).await.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn contact_form_is_public_but_inbox_is_not() {
    let app = build_secured_app();

    let response = post_json(
        &app.router,
        "/api/messages",
        json!({ "name": "Ada", "email": "ada@example.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(&app.router, "/api/messages").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app.router).await;
    let response = send(&app.router, Method::GET, "/api/messages", None, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn admin_mutations_require_token() {
    let app = build_secured_app();

    let response = post_json(&app.router, "/api/projects", json!({ "title": "Acme" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(
        &app.router,
        Method::PUT,
        "/api/settings",
        json_body(json!({ "name": "Mallory" })),
        Some("not-a-token"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");

    let settings = body_json(get(&app.router, "/api/settings").await).await;
    assert_eq!(settings["name"], "Your Name");
}

#[tokio::test]
async fn token_admits_admin_mutations() {
    let app = build_secured_app();
    let token = login(&app.router).await;

    let response = send(
        &app.router,
        Method::POST,
        "/api/projects",
        json_body(json!({ "title": "Acme" })),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = send(
        &app.router,
        Method::DELETE,
        &format!("/api/projects?id={id}"),
        None,
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
