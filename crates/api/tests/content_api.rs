mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::{
    body_json, delete_auth, get, get_auth, patch_json_auth, post_json_auth, put_json_auth,
    FixedMedia,
};
use serde_json::json;
use sqlx::SqlitePool;
use venue_integrations::MediaItem;

async fn create(
    pool: &SqlitePool,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_gallery_filters(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    create(
        &pool,
        "/api/v1/gallery",
        json!({"image_url": "/img/a.jpg", "category": "Stage", "photo_type": "event"}),
        &token,
    )
    .await;
    create(
        &pool,
        "/api/v1/gallery",
        json!({"image_url": "/img/b.jpg", "category": "Studio", "photo_type": "studio"}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/gallery").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/gallery?category=stage").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["image_url"], "/img/a.jpg");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/gallery?photo_type=STUDIO").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_gallery_rejects_long_photo_type(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/gallery",
        json!({"image_url": "/img/a.jpg", "photo_type": "x".repeat(21)}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_gallery_update_and_delete(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let image = create(
        &pool,
        "/api/v1/gallery",
        json!({"image_url": "/img/a.jpg", "photo_type": "event"}),
        &token,
    )
    .await;
    let id = image["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/gallery/{id}"),
        json!({"caption": "Opening night"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["caption"], "Opening night");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/gallery/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/gallery/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Photo slider
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_slider_reorder(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let a = create(&pool, "/api/v1/photo-slider", json!({"image_url": "/s/a.jpg"}), &token).await;
    let b = create(&pool, "/api/v1/photo-slider", json!({"image_url": "/s/b.jpg"}), &token).await;
    let c = create(
        &pool,
        "/api/v1/photo-slider",
        json!({"image_url": "/s/c.jpg", "is_active": false}),
        &token,
    )
    .await;
    let (a, b, c) = (
        a["id"].as_i64().unwrap(),
        b["id"].as_i64().unwrap(),
        c["id"].as_i64().unwrap(),
    );

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/photo-slider/order",
        json!({"ids": [c, a, b]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![c, a, b]);
    assert_eq!(json["data"][0]["sort_order"], 1);

    // The public list skips the inactive slide.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/photo-slider").await).await;
    assert_eq!(ids(&json), vec![a, b]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/photo-slider/all", &token).await).await;
    assert_eq!(ids(&json), vec![c, a, b]);

    // Partial or duplicated orders are refused.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/photo-slider/order",
        json!({"ids": [a, b]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/photo-slider/order",
        json!({"ids": [a, a, b]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_slider_patch_trims_url(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let slide = create(&pool, "/api/v1/photo-slider", json!({"image_url": "/s/a.jpg"}), &token).await;
    let uri = format!("/api/v1/photo-slider/{}", slide["id"]);

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(app, &uri, json!({"image_url": "  /s/b.jpg "}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["image_url"], "/s/b.jpg");

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(app, &uri, json!({"image_url": " "}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response =
        patch_json_auth(app, "/api/v1/photo-slider/999", json!({"caption": "x"}), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/photo-slider/999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Promotions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_running_promotions(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let today = Utc::now().date_naive();
    let fmt = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();

    create(
        &pool,
        "/api/v1/promotions",
        json!({
            "title": "Half-price wings",
            "start_date": fmt(today - Duration::days(1)),
            "end_date": fmt(today + Duration::days(1)),
        }),
        &token,
    )
    .await;
    create(
        &pool,
        "/api/v1/promotions",
        json!({"title": "Summer series", "start_date": fmt(today + Duration::days(30))}),
        &token,
    )
    .await;
    create(
        &pool,
        "/api/v1/promotions",
        json!({"title": "Paused", "is_active": false}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/promotions").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Half-price wings");

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/promotions/all", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_promotion_window_must_be_ordered(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/promotions",
        json!({"title": "Backwards", "start_date": "2026-05-10", "end_date": "2026-05-01"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let promo = create(
        &pool,
        "/api/v1/promotions",
        json!({"title": "Spring", "start_date": "2026-05-10"}),
        &token,
    )
    .await;

    // The patched end date is checked against the stored start date.
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/promotions/{}", promo["id"]),
        json!({"end_date": "2026-05-01"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Instagram
// ---------------------------------------------------------------------------

fn media(id: &str, day: u32) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        caption: Some(format!("Post {id}")),
        media_type: "IMAGE".to_string(),
        media_url: Some(format!("https://cdn.example.com/{id}.jpg")),
        permalink: Some(format!("https://instagram.com/p/{id}")),
        posted_at: Some(Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()),
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_instagram_refresh_upserts(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let items = vec![media("a1", 1), media("b2", 2)];

    for _ in 0..2 {
        let mut state = common::test_state(pool.clone());
        state.media = Some(Arc::new(FixedMedia {
            items: items.clone(),
        }));
        let app = common::build_app(state);
        let response = post_json_auth(app, "/api/v1/instagram-posts/refresh", json!({}), &token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["fetched"], 2);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/instagram-posts").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["external_id"], "b2");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/instagram-posts?limit=1").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_instagram_refresh_unconfigured(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/instagram-posts/refresh", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
