//! Request handlers, one module per resource.
//!
//! Handlers validate input with `venue_core` rules, delegate to the matching
//! repository in `venue_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod booking_input;
pub mod booking_reports;
pub mod bookings;
pub mod contacts;
pub mod dj_notes;
pub mod finance;
pub mod form_state;
pub mod gallery;
pub mod inquiries;
pub mod instagram;
pub mod karaoke;
pub mod karaoke_settings;
pub mod music_break;
pub mod photo_slider;
pub mod promotions;
pub mod reviews;
