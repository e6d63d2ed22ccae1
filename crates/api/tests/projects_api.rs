//! HTTP tests for `/api/projects`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, delete, get, post_json, put_json, send_raw};
use serde_json::json;

const PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=100";

// ---------------------------------------------------------------------------
// Test: full create -> list -> update -> delete lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_lifecycle() {
    let app = build_test_app();
    let router = &app.router;

    let response = post_json(
        router,
        "/api/projects",
        json!({ "title": "Acme", "category": "Web Dev", "techStack": "Rust, axum" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().expect("id should be a number");
    assert_eq!(created["status"], "Draft");
    assert_eq!(created["image"], PLACEHOLDER);

    let list = body_json(get(router, "/api/projects").await).await;
    assert_eq!(list, json!([created.clone()]));

    let response = put_json(router, "/api/projects", json!({ "id": id, "status": "Live" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "Live");
    assert_eq!(updated["title"], "Acme");
    assert_eq!(updated["techStack"], "Rust, axum");

    let list = body_json(get(router, "/api/projects").await).await;
    assert_eq!(list[0]["status"], "Live");

    let response = delete(router, &format!("/api/projects?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    assert_eq!(ack["success"], true);
    assert_eq!(ack["message"], "Project deleted successfully");

    let list = body_json(get(router, "/api/projects").await).await;
    assert_eq!(list, json!([]));

    let response = delete(router, &format!("/api/projects?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let app = build_test_app();
    let response = get(&app.router, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn blank_form_fields_receive_defaults() {
    let app = build_test_app();
    let response = post_json(
        &app.router,
        "/api/projects",
        json!({ "title": "", "category": "", "image": "", "liveUrl": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["title"], "Untitled Project");
    assert_eq!(created["category"], "Uncategorized");
    assert_eq!(created["image"], PLACEHOLDER);
    assert_eq!(created["liveUrl"], "");
}

#[tokio::test]
async fn update_accepts_string_id() {
    let app = build_test_app();
    let created =
        body_json(post_json(&app.router, "/api/projects", json!({ "title": "A" })).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        &app.router,
        "/api/projects",
        json!({ "id": id.to_string(), "title": "B" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "B");
}

#[tokio::test]
async fn update_without_id_is_bad_request() {
    let app = build_test_app();
    let response = put_json(&app.router, "/api/projects", json!({ "title": "No id" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Project ID is required for updating");
}

#[tokio::test]
async fn update_of_missing_project_is_not_found() {
    let app = build_test_app();
    let response = put_json(&app.router, "/api/projects", json!({ "id": 999, "title": "X" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Project with id 999 not found");
}

#[tokio::test]
async fn delete_requires_integer_id() {
    let app = build_test_app();

    let response = delete(&app.router, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Project ID is required");

    let response = delete(&app.router, "/api/projects?id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Project ID must be an integer");
}

#[tokio::test]
async fn malformed_json_is_bad_request_and_stores_nothing() {
    let app = build_test_app();

    let response = send_raw(&app.router, Method::POST, "/api/projects", "{ not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let list = body_json(get(&app.router, "/api/projects").await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = build_test_app();
    let response = post_json(&app.router, "/api/projects", json!({ "category": "Pottery" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
