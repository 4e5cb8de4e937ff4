mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, patch_json_auth, post_json};
use serde_json::json;
use sqlx::SqlitePool;

fn engineering_body(name: &str, email: &str, phone: &str) -> serde_json::Value {
    json!({
        "clientName": name,
        "clientEmail": email,
        "clientPhone": phone,
        "projectName": "Debut EP",
        "projectType": "Mixing",
        "projectStartDate": "2026-03-01",
        "projectEndDate": "2026-03-05",
        "price": "450",
    })
}

fn performance_body(name: &str, email: &str) -> serde_json::Value {
    json!({
        "clientName": name,
        "clientEmail": email,
        "eventName": "Spring Gala",
        "eventType": "Corporate",
        "eventDateTime": "2026-04-12T19:00",
        "location": "Main Hall",
    })
}

fn karaoke_hosting_body(name: &str, email: &str) -> serde_json::Value {
    json!({
        "clientName": name,
        "clientEmail": email,
        "eventName": "Birthday",
        "eventDate": "2026-05-02",
        "startTime": "20:00",
        "location": "Back Room",
        "price": 300,
    })
}

async fn create(pool: &SqlitePool, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn set_status(pool: &SqlitePool, token: &str, uri: &str, status: &str) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(app, uri, json!({"status": status}), token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_contact_defaults_to_pending(pool: SqlitePool) {
    let body = json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann@example.com",
        "message": "Do you host open mic?",
    });
    let contact = create(&pool, "/api/v1/contacts", body).await;
    assert_eq!(contact["status"], "Pending");
    assert_eq!(contact["first_name"], "Ann");
    assert!(contact["price"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_contact_invalid_email_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({"firstName": "Ann", "email": "not-an-email"});
    let response = post_json(app, "/api/v1/contacts", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_contact_invalid_status_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({"firstName": "Ann", "email": "ann@example.com", "status": "Maybe"});
    let response = post_json(app, "/api/v1/contacts", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_contacts_listing_requires_admin(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/contacts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_contact_status_and_price(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let contact = create(
        &pool,
        "/api/v1/contacts",
        json!({"firstName": "Ann", "email": "ann@example.com"}),
    )
    .await;
    let id = contact["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contacts/{id}"),
        json!({"status": "Booked", "price": "125.50"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Booked");
    assert_eq!(json["data"]["price"], 125.5);

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contacts/{id}"),
        json!({"price": "lots"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Price must be a valid number");
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bookings_share_contact_by_email(pool: SqlitePool) {
    let first = create(
        &pool,
        "/api/v1/engineering-bookings",
        engineering_body("Ann Lee", "ann@example.com", "5551234"),
    )
    .await;
    let second = create(
        &pool,
        "/api/v1/performance-bookings",
        performance_body("Ann Lee", "ANN@example.com"),
    )
    .await;

    assert_eq!(first["contact_id"], second["contact_id"]);
    assert_eq!(first["status"], "Pending");
    assert_eq!(first["price"], 450.0);
    assert_eq!(first["client_name"], "Ann Lee");
    assert_eq!(second["client_phone"], "5551234");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_booking_missing_field_rejected(pool: SqlitePool) {
    let mut body = engineering_body("Ann Lee", "ann@example.com", "5551234");
    body["projectName"] = json!("  ");
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/engineering-bookings", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_booking_long_phone_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = engineering_body("Ann Lee", "ann@example.com", "1234567890123456");
    let response = post_json(app, "/api/v1/engineering-bookings", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_karaoke_hosting_list_is_admin_only(pool: SqlitePool) {
    create(
        &pool,
        "/api/v1/karaoke-hosting",
        karaoke_hosting_body("Bo Diaz", "bo@example.com"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/karaoke-hosting").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/karaoke-hosting", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_referenced_contact_cannot_be_deleted(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let booking = create(
        &pool,
        "/api/v1/engineering-bookings",
        engineering_body("Ann Lee", "ann@example.com", "5551234"),
    )
    .await;
    let booking_id = booking["id"].as_i64().unwrap();
    let contact_id = booking["contact_id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/contacts/{contact_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/engineering-bookings/{booking_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/contacts/{contact_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Inquiries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inquiry_lifecycle(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let inquiry = create(
        &pool,
        "/api/v1/inquiries",
        json!({
            "name": "Dee Park",
            "email": "dee@example.com",
            "subject": "Private party",
            "message": "Is the back room free in June?",
        }),
    )
    .await;
    assert_eq!(inquiry["status"], "New");
    assert_eq!(inquiry["client_name"], "Dee Park");
    let id = inquiry["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/inquiries/{id}"),
        json!({"status": "Responded"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "Responded");

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/inquiries/{id}"),
        json!({"status": "Ignored"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/inquiries", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/inquiries/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inquiry_requires_subject(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({
        "name": "Dee Park",
        "email": "dee@example.com",
        "subject": "",
        "message": "Hello",
    });
    let response = post_json(app, "/api/v1/inquiries", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_and_booked_listing(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let ann = create(
        &pool,
        "/api/v1/engineering-bookings",
        engineering_body("Ann Lee", "ann@example.com", "5551234"),
    )
    .await;
    create(
        &pool,
        "/api/v1/performance-bookings",
        performance_body("Bo Diaz", "bo@example.com"),
    )
    .await;
    set_status(
        &pool,
        &token,
        &format!("/api/v1/engineering-bookings/{}", ann["id"]),
        "Booked",
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/bookings/search?name=ann").await).await;
    assert_eq!(json["data"]["engineering_bookings"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["performance_bookings"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/bookings/search?phone=555").await).await;
    assert_eq!(json["data"]["engineering_bookings"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/bookings/booked", &token).await).await;
    assert_eq!(json["data"]["engineering_bookings"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["performance_bookings"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/bookings/all", &token).await).await;
    assert_eq!(json["data"]["engineering_bookings"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["performance_bookings"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["contacts"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_earnings_reports(pool: SqlitePool) {
    let token = common::admin_token(&pool).await;
    let booked = create(
        &pool,
        "/api/v1/engineering-bookings",
        engineering_body("Ann Lee", "ann@example.com", "5551234"),
    )
    .await;
    let paid = create(
        &pool,
        "/api/v1/karaoke-hosting",
        karaoke_hosting_body("Bo Diaz", "bo@example.com"),
    )
    .await;
    // Still pending, so it counts nowhere.
    create(
        &pool,
        "/api/v1/engineering-bookings",
        engineering_body("Cy Fox", "cy@example.com", "5559999"),
    )
    .await;

    set_status(
        &pool,
        &token,
        &format!("/api/v1/engineering-bookings/{}", booked["id"]),
        "Booked",
    )
    .await;
    set_status(
        &pool,
        &token,
        &format!("/api/v1/karaoke-hosting/{}", paid["id"]),
        "Booked & Paid",
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/bookings/total-earnings", &token).await).await;
    assert_eq!(json["data"]["engineering_total"], 450.0);
    assert_eq!(json["data"]["karaoke_hosting_total"], 300.0);
    assert_eq!(json["data"]["grand_total"], 750.0);

    let app = common::build_test_app(pool.clone());
    let json =
        body_json(get_auth(app, "/api/v1/bookings/potential-earnings", &token).await).await;
    assert_eq!(json["data"]["engineering_total"], 0.0);
    assert_eq!(json["data"]["grand_total"], 300.0);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/bookings/monthly-earnings").await).await;
    let engineering: f64 = json["data"]["engineering_monthly"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .sum();
    assert_eq!(engineering, 450.0);
    assert_eq!(json["data"]["engineering_monthly"].as_array().unwrap().len(), 12);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/bookings/monthly-earnings?year=99999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
