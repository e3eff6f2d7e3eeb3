//! HTTP-level integration tests for the `/categories` endpoints.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

async fn create_category(pool: &PgPool, name: &str) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/categories", json!({"name": name}), &common::token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_returns_201(pool: PgPool) {
    let json = create_category(&pool, "Beer").await;

    assert_eq!(json["name"], "Beer");
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 36, "id should be a hyphenated UUID");
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());
    assert!(json.get("is_active").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_ids_are_unique(pool: PgPool) {
    let a = create_category(&pool, "Beer").await;
    let b = create_category(&pool, "Wine").await;
    assert_ne!(a["id"], b["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_returns_409(pool: PgPool) {
    create_category(&pool, "Beer").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/categories", json!({"name": "Beer"}), &common::token()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/categories", json!({"name": "  "}), &common::token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_name_is_rejected_by_decoder(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/categories", json!({}), &common::token()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers()["content-type"],
        "application/json",
        "decode errors use the JSON error body"
    );

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/categories")
        .header("Authorization", format!("Bearer {}", common::token()))
        .header("Content-Type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_is_trimmed_before_uniqueness_check(pool: PgPool) {
    let created = create_category(&pool, "  Beer ").await;
    assert_eq!(created["name"], "Beer");

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/categories", json!({"name": "Beer"}), &common::token()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_empty_array_when_none(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/categories", &common::token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_sorted_and_excludes_deleted(pool: PgPool) {
    create_category(&pool, "Wine").await;
    let snacks = create_category(&pool, "Snacks").await;
    create_category(&pool, "Beer").await;

    let id = snacks["id"].as_str().unwrap();
    let app = common::build_test_app(pool.clone());
    delete_auth(app, &format!("/categories/{id}"), &common::token()).await;

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/categories", &common::token()).await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Beer", "Wine"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_category_by_id(pool: PgPool) {
    let created = create_category(&pool, "Spirits").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/categories/{id}"), &common::token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/categories/not-a-real-id", &common::token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_returns_persisted_state(pool: PgPool) {
    let created = create_category(&pool, "Softs").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/categories/{id}"),
        json!({"name": "Soft Drinks"}),
        &common::token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], created["id"]);
    assert_eq!(json["name"], "Soft Drinks");
    assert_eq!(json["created_at"], created["created_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/categories/missing",
        json!({"name": "Ghost"}),
        &common::token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_to_taken_name_returns_409(pool: PgPool) {
    create_category(&pool, "Beer").await;
    let wine = create_category(&pool, "Wine").await;
    let id = wine["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/categories/{id}"),
        json!({"name": "Beer"}),
        &common::token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_idempotent_and_hides_category(pool: PgPool) {
    let created = create_category(&pool, "Delete Me").await;
    let uri = format!("/categories/{}", created["id"].as_str().unwrap());

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = delete_auth(app, &uri, &common::token()).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &uri, &common::token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/categories/never-existed", &common::token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
