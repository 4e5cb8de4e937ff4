//! Karaoke hosting (private event) booking models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A karaoke hosting booking joined with its contact's name, email, and phone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KaraokeHostingBooking {
    pub id: DbId,
    pub contact_id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_name: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: String,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<f64>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Public form payload for `POST /karaoke-hosting`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KaraokeHostingRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_name: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: String,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct CreateKaraokeHostingBooking {
    pub event_name: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: String,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<f64>,
}
