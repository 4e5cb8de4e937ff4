#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use venue_api::auth::jwt::{generate_access_token, JwtConfig};
use venue_api::auth::password::hash_password;
use venue_api::config::{IntegrationConfig, ServerConfig, DEFAULT_GRAPH_API_BASE_URL};
use venue_api::router::build_app_router;
use venue_api::state::AppState;
use venue_core::types::DbId;
use venue_db::models::user::CreateUser;
use venue_db::repositories::UserRepo;
use venue_integrations::{DistanceLookup, IntegrationError, MediaItem, MediaSource};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and no integrations.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5174".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        integrations: IntegrationConfig {
            graph_api_base_url: DEFAULT_GRAPH_API_BASE_URL.to_string(),
            ..IntegrationConfig::default()
        },
        mileage_rate: 0.70,
    }
}

/// State with no external services configured.
pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
        distance: None,
        media: None,
    }
}

/// Build the full application router over `state`, with the production
/// middleware stack.
pub fn build_app(state: AppState) -> Router {
    let config = test_config();
    build_app_router(state, &config)
}

/// Router with no external services configured.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app(test_state(pool))
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert a user directly and return its id.
pub async fn create_user(pool: &SqlitePool, username: &str, is_admin: bool) -> DbId {
    let input = CreateUser {
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        is_admin,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

/// Create an admin and return a bearer token for it.
pub async fn admin_token(pool: &SqlitePool) -> String {
    let id = create_user(pool, "admin", true).await;
    token_for(id, true)
}

/// Sign an admin token for an existing user looked up by name.
pub async fn admin_token_for(pool: &SqlitePool, username: &str) -> String {
    let user = UserRepo::find_by_username(pool, username)
        .await
        .expect("lookup should succeed")
        .expect("user should exist");
    token_for(user.id, user.is_admin)
}

/// Sign a token for an existing user id.
pub fn token_for(user_id: DbId, is_admin: bool) -> String {
    generate_access_token(user_id, is_admin, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

// ---------------------------------------------------------------------------
// Fake external services
// ---------------------------------------------------------------------------

/// Distance lookup that always answers with a fixed one-way distance, or
/// fails with an upstream error when `miles` is `None`.
pub struct FixedDistance {
    pub miles: Option<f64>,
}

#[async_trait]
impl DistanceLookup for FixedDistance {
    async fn distance_miles(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<f64, IntegrationError> {
        self.miles.ok_or_else(|| IntegrationError::ApiError {
            status: 500,
            body: "upstream down".to_string(),
        })
    }
}

/// Media source returning a fixed list of items.
pub struct FixedMedia {
    pub items: Vec<MediaItem>,
}

#[async_trait]
impl MediaSource for FixedMedia {
    async fn recent_media(&self, limit: u32) -> Result<Vec<MediaItem>, IntegrationError> {
        Ok(self.items.iter().take(limit as usize).cloned().collect())
    }
}
