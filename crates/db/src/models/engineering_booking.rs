//! Engineering (studio/production) booking models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// An engineering booking joined with its contact's name, email, and phone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EngineeringBooking {
    pub id: DbId,
    pub contact_id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub project_name: String,
    pub project_manager: Option<String>,
    pub project_type: String,
    pub project_start_date: String,
    pub project_end_date: String,
    pub project_description: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<f64>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Public form payload for `POST /engineering-bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineeringBookingRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub project_name: String,
    pub project_manager: Option<String>,
    pub project_type: String,
    pub project_start_date: String,
    pub project_end_date: String,
    pub project_description: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<serde_json::Value>,
}

/// Insert DTO. The contact is resolved from the client details.
#[derive(Debug, Clone)]
pub struct CreateEngineeringBooking {
    pub project_name: String,
    pub project_manager: Option<String>,
    pub project_type: String,
    pub project_start_date: String,
    pub project_end_date: String,
    pub project_description: Option<String>,
    pub special_requests: Option<String>,
    pub price: Option<f64>,
}
