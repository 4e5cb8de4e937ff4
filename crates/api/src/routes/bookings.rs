//! Route definitions for the booking kinds and the cross-table reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::{booking_reports, bookings};
use crate::state::AppState;

/// Engineering booking routes mounted at `/engineering-bookings`.
///
/// ```text
/// GET    /       -> list_engineering_bookings
/// POST   /       -> create_engineering_booking
/// GET    /{id}   -> get_engineering_booking (admin)
/// PATCH  /{id}   -> update_engineering_booking (admin)
/// DELETE /{id}   -> delete_engineering_booking (admin)
/// ```
pub fn engineering_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bookings::list_engineering_bookings).post(bookings::create_engineering_booking),
        )
        .route(
            "/{id}",
            get(bookings::get_engineering_booking)
                .patch(bookings::update_engineering_booking)
                .delete(bookings::delete_engineering_booking),
        )
}

/// Performance booking routes mounted at `/performance-bookings`.
///
/// ```text
/// GET    /       -> list_performance_bookings
/// POST   /       -> create_performance_booking
/// GET    /{id}   -> get_performance_booking (admin)
/// PATCH  /{id}   -> update_performance_booking (admin)
/// DELETE /{id}   -> delete_performance_booking (admin)
/// ```
pub fn performance_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bookings::list_performance_bookings).post(bookings::create_performance_booking),
        )
        .route(
            "/{id}",
            get(bookings::get_performance_booking)
                .patch(bookings::update_performance_booking)
                .delete(bookings::delete_performance_booking),
        )
}

/// Karaoke hosting routes mounted at `/karaoke-hosting`.
///
/// ```text
/// GET    /       -> list_karaoke_hosting (admin)
/// POST   /       -> create_karaoke_hosting
/// GET    /{id}   -> get_karaoke_hosting (admin)
/// PATCH  /{id}   -> update_karaoke_hosting (admin)
/// DELETE /{id}   -> delete_karaoke_hosting (admin)
/// ```
pub fn karaoke_hosting_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bookings::list_karaoke_hosting).post(bookings::create_karaoke_hosting),
        )
        .route(
            "/{id}",
            get(bookings::get_karaoke_hosting)
                .patch(bookings::update_karaoke_hosting)
                .delete(bookings::delete_karaoke_hosting),
        )
}

/// Aggregate booking routes mounted at `/bookings`.
///
/// ```text
/// GET /all                  -> all_bookings (admin)
/// GET /booked               -> booked_bookings (admin)
/// GET /search               -> search_bookings
/// GET /monthly-earnings     -> monthly_earnings
/// GET /total-earnings       -> total_earnings (admin)
/// GET /potential-earnings   -> potential_earnings (admin)
/// ```
pub fn reports_router() -> Router<AppState> {
    Router::new()
        .route("/all", get(booking_reports::all_bookings))
        .route("/booked", get(booking_reports::booked_bookings))
        .route("/search", get(booking_reports::search_bookings))
        .route("/monthly-earnings", get(booking_reports::monthly_earnings))
        .route("/total-earnings", get(booking_reports::total_earnings))
        .route("/potential-earnings", get(booking_reports::potential_earnings))
}
