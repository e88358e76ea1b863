//! HTTP-level integration tests for journey CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_journey_returns_201_with_timestamps(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/journeys", serde_json::json!({"name": "Trip"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Trip");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_journey_without_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/journeys", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "name is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_journey_with_blank_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/journeys", serde_json::json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_journeys_preserves_creation_order(pool: SqlitePool) {
    for name in ["first", "second", "third"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/journeys", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/journeys").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_journey_by_id(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/journeys", serde_json::json!({"name": "Get Me"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/journeys/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_journey_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/journeys/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_journey_with_malformed_id_returns_400_with_message(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/journeys/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Extractor rejections carry the same JSON error shape as every
    // other failure, not a plain-text body.
    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_journey_with_malformed_body_returns_400_with_message(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/journeys")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_journey_updates_name(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/journeys", serde_json::json!({"name": "Original"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/journeys/{id}"),
        serde_json::json!({"name": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Renamed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_nonexistent_journey_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/journeys/99999",
        serde_json::json!({"name": "Whatever"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_journey_without_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/journeys", serde_json::json!({"name": "Keep"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/journeys/{id}"), serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_journey_returns_204_then_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/journeys", serde_json::json!({"name": "Delete Me"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/journeys/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/journeys/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_journey_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/journeys/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
