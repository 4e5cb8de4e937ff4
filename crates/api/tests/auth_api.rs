mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_first_admin_can_bootstrap(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({
        "username": "owner",
        "password": "supersecret1",
        "is_admin": true,
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "owner");
    assert_eq!(json["data"]["is_admin"], true);
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_second_admin_requires_admin_caller(pool: SqlitePool) {
    common::create_user(&pool, "owner", true).await;
    let body = json!({
        "username": "intruder",
        "password": "supersecret1",
        "is_admin": true,
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let token = common::admin_token_for(&pool, "owner").await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/auth/signup", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_username_rejected(pool: SqlitePool) {
    common::create_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);
    let body = json!({"username": "alice", "password": "supersecret1"});
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Username already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_short_password_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({"username": "bob", "password": "short"});
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: SqlitePool) {
    common::create_user(&pool, "alice", true).await;
    let app = common::build_test_app(pool);
    let body = json!({"username": "alice", "password": common::TEST_PASSWORD});
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(json["data"]["is_admin"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: SqlitePool) {
    common::create_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);
    let body = json!({"username": "alice", "password": "not-the-password"});
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({"username": "ghost", "password": "whatever123"});
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Token checks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_current_user(pool: SqlitePool) {
    let id = common::create_user(&pool, "alice", false).await;
    let token = common::token_for(id, false);
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["username"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_token_is_unauthorized(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/contacts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_token_is_unauthorized(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/contacts", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_admin_is_forbidden(pool: SqlitePool) {
    let id = common::create_user(&pool, "alice", false).await;
    let token = common::token_for(id, false);
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/contacts", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin role required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_demoted_admin_token_is_forbidden(pool: SqlitePool) {
    // A token minted with the admin flag still needs the stored role.
    let id = common::create_user(&pool, "alice", false).await;
    let token = common::token_for(id, true);
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/contacts", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
