//! Live performance booking models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A performance booking joined with its contact's name, email, and phone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PerformanceBooking {
    pub id: DbId,
    pub contact_id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_name: String,
    pub event_type: String,
    pub event_date_time: String,
    pub location: String,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<f64>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Public form payload for `POST /performance-bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBookingRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_name: String,
    pub event_type: String,
    pub event_date_time: String,
    pub location: String,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct CreatePerformanceBooking {
    pub event_name: String,
    pub event_type: String,
    pub event_date_time: String,
    pub location: String,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<f64>,
}
