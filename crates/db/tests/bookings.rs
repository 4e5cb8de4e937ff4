//! Integration tests for contacts, bookings, and the aggregate reports.

use sqlx::SqlitePool;
use venue_core::booking::{BOOKED_STATUSES, EARNING_STATUSES, PAID_STATUSES};
use venue_db::models::booking::{BookingSearch, BookingTable, StatusPriceUpdate};
use venue_db::models::contact::{ClientDetails, CreateContact};
use venue_db::models::engineering_booking::CreateEngineeringBooking;
use venue_db::models::inquiry::CreateInquiry;
use venue_db::models::performance_booking::CreatePerformanceBooking;
use venue_db::repositories::{
    BookingReportRepo, BookingRepo, ContactRepo, EngineeringBookingRepo, InquiryRepo,
    PerformanceBookingRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn client(first: &str, last: &str, email: &str) -> ClientDetails {
    ClientDetails {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: Some("5551234".to_string()),
    }
}

fn engineering(price: Option<f64>) -> CreateEngineeringBooking {
    CreateEngineeringBooking {
        project_name: "Demo EP".to_string(),
        project_manager: None,
        project_type: "Mixing".to_string(),
        project_start_date: "2025-03-01".to_string(),
        project_end_date: "2025-03-10".to_string(),
        project_description: None,
        special_requests: None,
        price,
    }
}

fn performance(price: Option<f64>) -> CreatePerformanceBooking {
    CreatePerformanceBooking {
        event_name: "Spring Gala".to_string(),
        event_type: "Corporate".to_string(),
        event_date_time: "2025-04-12T19:00".to_string(),
        location: "Main Hall".to_string(),
        guests: Some("120".to_string()),
        special_requests: None,
        price,
    }
}

async fn set_status(pool: &SqlitePool, table: BookingTable, id: i64, status: &str) {
    let update = StatusPriceUpdate {
        status: Some(status.to_string()),
        price: None,
    };
    assert!(BookingRepo::update_status_price(pool, table, id, &update)
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_booking_reuses_contact_by_email(pool: SqlitePool) {
    let first = EngineeringBookingRepo::create(
        &pool,
        &client("Jane", "Doe", "jane@example.com"),
        &engineering(Some(300.0)),
    )
    .await
    .unwrap();
    assert_eq!(first.client_name, "Jane Doe");
    assert_eq!(first.client_email, "jane@example.com");
    assert_eq!(first.status, "Pending");

    let second = PerformanceBookingRepo::create(
        &pool,
        &client("Jane", "Doe", "JANE@example.com"),
        &performance(None),
    )
    .await
    .unwrap();
    assert_eq!(second.contact_id, first.contact_id);

    assert_eq!(ContactRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_referenced_contact_cannot_be_deleted(pool: SqlitePool) {
    let inquiry = InquiryRepo::create(
        &pool,
        &client("Sam", "", "sam@example.com"),
        &CreateInquiry {
            subject: "Rates".to_string(),
            message: "What do you charge?".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(inquiry.client_name, "Sam");
    assert_eq!(inquiry.status, "New");

    assert!(ContactRepo::is_referenced(&pool, inquiry.contact_id)
        .await
        .unwrap());
    let err = ContactRepo::delete(&pool, inquiry.contact_id)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_foreign_key_violation());

    assert!(InquiryRepo::delete(&pool, inquiry.id).await.unwrap());
    assert!(ContactRepo::delete(&pool, inquiry.contact_id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_totals_and_booked_filter(pool: SqlitePool) {
    let contact = ContactRepo::create(
        &pool,
        &CreateContact {
            first_name: "Lee".to_string(),
            last_name: "Park".to_string(),
            phone: None,
            email: "lee@example.com".to_string(),
            message: "Hi".to_string(),
            status: "Booked".to_string(),
            price: Some(100.0),
        },
    )
    .await
    .unwrap();

    let eng = EngineeringBookingRepo::create(
        &pool,
        &client("Ana", "Ruiz", "ana@example.com"),
        &engineering(Some(250.5)),
    )
    .await
    .unwrap();
    set_status(&pool, BookingTable::Engineering, eng.id, "Completed").await;

    let perf = PerformanceBookingRepo::create(
        &pool,
        &client("Ana", "Ruiz", "ana@example.com"),
        &performance(Some(999.0)),
    )
    .await
    .unwrap();
    set_status(&pool, BookingTable::Performance, perf.id, "Cancelled").await;

    let totals = BookingReportRepo::totals(&pool, EARNING_STATUSES).await.unwrap();
    assert_eq!(totals, [100.0, 250.5, 0.0, 0.0]);

    let paid = BookingReportRepo::totals(&pool, PAID_STATUSES).await.unwrap();
    assert_eq!(paid, [0.0, 250.5, 0.0, 0.0]);

    let booked = BookingReportRepo::with_statuses(&pool, BOOKED_STATUSES)
        .await
        .unwrap();
    assert_eq!(booked.contacts.len(), 1);
    assert_eq!(booked.contacts[0].id, contact.id);
    assert!(booked.engineering_bookings.is_empty());
    assert!(booked.performance_bookings.is_empty());

    let monthly = BookingReportRepo::monthly_earnings(&pool, EARNING_STATUSES, None)
        .await
        .unwrap();
    assert_eq!(monthly.contact_monthly.iter().sum::<f64>(), 100.0);
    assert_eq!(monthly.engineering_monthly.iter().sum::<f64>(), 250.5);
    assert_eq!(monthly.performance_monthly.iter().sum::<f64>(), 0.0);

    let none = BookingReportRepo::monthly_earnings(&pool, EARNING_STATUSES, Some(1999))
        .await
        .unwrap();
    assert_eq!(none.engineering_monthly, [0.0; 12]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_name_phone_and_status(pool: SqlitePool) {
    EngineeringBookingRepo::create(
        &pool,
        &client("Maria", "Lopez", "maria@example.com"),
        &engineering(None),
    )
    .await
    .unwrap();
    PerformanceBookingRepo::create(
        &pool,
        &ClientDetails {
            first_name: "Tom".to_string(),
            last_name: "Hart".to_string(),
            email: "tom@example.com".to_string(),
            phone: Some("8880000".to_string()),
        },
        &performance(None),
    )
    .await
    .unwrap();

    let by_name = BookingReportRepo::search(
        &pool,
        &BookingSearch {
            name: Some("lopez".to_string()),
            ..BookingSearch::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_name.engineering_bookings.len(), 1);
    assert!(by_name.performance_bookings.is_empty());
    assert_eq!(by_name.contacts.len(), 1);

    let by_phone = BookingReportRepo::search(
        &pool,
        &BookingSearch {
            phone: Some("888".to_string()),
            ..BookingSearch::default()
        },
    )
    .await
    .unwrap();
    assert!(by_phone.engineering_bookings.is_empty());
    assert_eq!(by_phone.performance_bookings.len(), 1);

    let by_status = BookingReportRepo::search(
        &pool,
        &BookingSearch {
            status: Some("pend".to_string()),
            ..BookingSearch::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_status.engineering_bookings.len(), 1);
    assert_eq!(by_status.performance_bookings.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_treats_wildcards_literally(pool: SqlitePool) {
    EngineeringBookingRepo::create(
        &pool,
        &client("Maria", "Lopez", "maria@example.com"),
        &engineering(None),
    )
    .await
    .unwrap();

    for term in ["%", "_", "m%z"] {
        let found = BookingReportRepo::search(
            &pool,
            &BookingSearch {
                name: Some(term.to_string()),
                ..BookingSearch::default()
            },
        )
        .await
        .unwrap();
        assert!(found.engineering_bookings.is_empty(), "name search {term:?}");
        assert!(found.contacts.is_empty(), "name search {term:?}");
    }
}
