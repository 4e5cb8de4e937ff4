pub mod auth;
pub mod bookings;
pub mod contacts;
pub mod finance;
pub mod gallery;
pub mod health;
pub mod inquiries;
pub mod instagram;
pub mod karaoke;
pub mod photo_slider;
pub mod promotions;
pub mod reviews;
pub mod venue_state;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup, /auth/login, /auth/me               accounts
///
/// /reviews                                          public list/submit, admin moderation
/// /contacts                                         public submit, admin manage
/// /engineering-bookings                             public submit/list, admin manage
/// /performance-bookings                             public submit/list, admin manage
/// /karaoke-hosting                                  public submit, admin list/manage
/// /bookings/{all,booked,search,...}                 cross-table reports
/// /inquiries                                        public submit, admin manage
///
/// /gallery                                          public list, admin manage
/// /photo-slider                                     public list, admin manage/reorder
/// /promotions                                       public running list, admin manage
/// /instagram-posts                                  public cached feed, admin refresh
///
/// /karaoke                                          signup queue
/// /karaoke-settings                                 PIN gating
/// /form-state                                       form visibility flags
/// /music-break                                      music-break alert
/// /dj-notes                                         DJ reminders (admin)
///
/// /expenses, /income, /mileage, /finance/summary    bookkeeping (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        // Bookings and customer contact.
        .nest("/reviews", reviews::router())
        .nest("/contacts", contacts::router())
        .nest("/engineering-bookings", bookings::engineering_router())
        .nest("/performance-bookings", bookings::performance_router())
        .nest("/karaoke-hosting", bookings::karaoke_hosting_router())
        .nest("/bookings", bookings::reports_router())
        .nest("/inquiries", inquiries::router())
        // Public site content.
        .nest("/gallery", gallery::router())
        .nest("/photo-slider", photo_slider::router())
        .nest("/promotions", promotions::router())
        .nest("/instagram-posts", instagram::router())
        // Karaoke night.
        .nest("/karaoke", karaoke::router())
        .nest("/karaoke-settings", karaoke::settings_router())
        .nest("/form-state", venue_state::form_state_router())
        .nest("/music-break", venue_state::music_break_router())
        .nest("/dj-notes", venue_state::dj_notes_router())
        // Bookkeeping.
        .nest("/expenses", finance::expenses_router())
        .nest("/income", finance::income_router())
        .nest("/mileage", finance::mileage_router())
        .nest("/finance", finance::summary_router())
}
