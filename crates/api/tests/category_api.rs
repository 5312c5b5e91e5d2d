//! Integration tests for the `/categories` resource.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, send_json, validation_fields};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

/// POST a category and return its body. Panics on non-201.
async fn create_category(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = send_json(
        common::build_test_app(pool.clone()),
        Method::POST,
        "/categories",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_generated_id_and_defaults(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "greeting-cards" })).await;

    assert_eq!(created["name"], "greeting-cards");
    assert_eq!(created["visible"], true);
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_honours_valid_client_supplied_id(pool: PgPool) {
    let id = Uuid::new_v4().to_string();
    let created = create_category(&pool, json!({ "id": id, "name": "with-id" })).await;

    assert_eq!(created["id"], json!(id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_discards_invalid_client_supplied_id(pool: PgPool) {
    let created = create_category(&pool, json!({ "id": "not-a-uuid", "name": "bad-id" })).await;

    let id = created["id"].as_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
    assert_ne!(id, "not-a-uuid");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_empty_name_returns_400_naming_the_field(pool: PgPool) {
    let response = send_json(
        common::build_test_app(pool),
        Method::POST,
        "/categories",
        json!({ "name": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(validation_fields(&body).contains(&"name".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_name_returns_400(pool: PgPool) {
    let response = send_json(
        common::build_test_app(pool),
        Method::POST,
        "/categories",
        json!({ "visible": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_returns_the_category(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "findable" })).await;
    let id = created["id"].as_str().unwrap();

    let response = get(common::build_test_app(pool), &format!("/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_of_absent_id_returns_400(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        &format!("/categories/{}", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// List / filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unfiltered_listing_includes_invisible_categories(pool: PgPool) {
    create_category(&pool, json!({ "name": "same-name", "visible": true })).await;
    create_category(&pool, json!({ "name": "same-name", "visible": false })).await;

    let response = get(common::build_test_app(pool), "/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn name_filter_only_surfaces_visible_categories(pool: PgPool) {
    create_category(&pool, json!({ "name": "same-name", "visible": true })).await;
    create_category(&pool, json!({ "name": "same-name", "visible": false })).await;

    let response = get(common::build_test_app(pool), "/categories?name=same-name").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["visible"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_applies_limit_and_offset(pool: PgPool) {
    for i in 0..3 {
        create_category(&pool, json!({ "name": format!("page-{i}") })).await;
    }

    let response = get(common::build_test_app(pool.clone()), "/categories?limit=2").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(pool), "/categories?offset=2").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_modifies_only_supplied_fields(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "partial" })).await;
    let id = created["id"].as_str().unwrap();

    let response = send_json(
        common::build_test_app(pool),
        Method::PUT,
        &format!("/categories/{id}"),
        json!({ "visible": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "partial");
    assert_eq!(updated["visible"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_update_returns_the_category_unchanged(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "unchanged" })).await;
    let id = created["id"].as_str().unwrap();

    let response = send_json(
        common::build_test_app(pool),
        Method::PUT,
        &format!("/categories/{id}"),
        json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_discards_client_supplied_id(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "immutable-id" })).await;
    let id = created["id"].as_str().unwrap();

    let response = send_json(
        common::build_test_app(pool),
        Method::PUT,
        &format!("/categories/{id}"),
        json!({ "id": Uuid::new_v4(), "name": "renamed" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["name"], "renamed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_empty_name_returns_400(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "keeps-name" })).await;
    let id = created["id"].as_str().unwrap();

    let response = send_json(
        common::build_test_app(pool),
        Method::PUT,
        &format!("/categories/{id}"),
        json!({ "name": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(validation_fields(&body).contains(&"name".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_of_absent_id_returns_400(pool: PgPool) {
    let response = send_json(
        common::build_test_app(pool),
        Method::PUT,
        &format!("/categories/{}", Uuid::new_v4()),
        json!({ "name": "anything" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_returns_204_then_get_returns_400(pool: PgPool) {
    let created = create_category(&pool, json!({ "name": "short-lived" })).await;
    let id = created["id"].as_str().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/categories/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_of_absent_id_returns_400(pool: PgPool) {
    let response = delete(
        common::build_test_app(pool),
        &format!("/categories/{}", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
