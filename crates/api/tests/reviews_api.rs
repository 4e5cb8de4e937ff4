mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, patch_json_auth, post_json};
use serde_json::json;
use sqlx::SqlitePool;

fn review(name: &str, rating: serde_json::Value, service: &str) -> serde_json::Value {
    json!({
        "name": name,
        "rating": rating,
        "service": service,
        "description": "Great night out",
    })
}

/// Submit a review and approve it, returning its id.
async fn approved_review(pool: &SqlitePool, token: &str, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/reviews", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/reviews/{id}"),
        json!({"is_approved": true}),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    id
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submitted_review_is_pending(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/reviews", review("Ann", json!(4.5), "Karaoke")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 4.5);
    assert_eq!(json["data"]["is_approved"], false);
    let id = json["data"]["id"].as_i64().unwrap();

    // Hidden from the public until approved.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/reviews").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/reviews/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rating_accepts_numeric_string(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/reviews", review("Ann", json!("3.5"), "Studio")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 3.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_rating_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/reviews", review("Ann", json!("great"), "Studio")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid value for 'rating'. It must be a number (e.g., 4.5)."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_out_of_range_rating_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/reviews", review("Ann", json!(6), "Studio")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_fields_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/reviews", json!({"name": "Ann"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Missing required fields: name, rating, service, description"
    );
}

// ---------------------------------------------------------------------------
// Moderation and listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_average_requires_approved_reviews(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/reviews/average").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No reviews found");
    assert_eq!(json["code"], "NOT_FOUND");

    let token = common::admin_token(&pool).await;
    approved_review(&pool, &token, review("Ann", json!(5), "Karaoke")).await;
    approved_review(&pool, &token, review("Bo", json!(4), "Studio")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reviews/average").await).await;
    assert_eq!(json["data"]["average_rating"], 4.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_service_filter_matches_substring(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    approved_review(&pool, &token, review("Ann", json!(5), "Karaoke Night")).await;
    approved_review(&pool, &token, review("Bo", json!(4), "Studio")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reviews?service=karaoke").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Ann");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_service_filter_wildcards_are_literal(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    approved_review(&pool, &token, review("Ann", json!(5), "50% Off Karaoke")).await;
    approved_review(&pool, &token, review("Bo", json!(4), "Studio 500")).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/reviews?service=50%25").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Ann");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reviews?service=_").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_sees_all_and_deletes(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/reviews", review("Ann", json!(2), "Studio")).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/reviews/all", &token).await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    let id = data[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/reviews/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/reviews/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
