//! Contact models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub message: String,
    pub status: String,
    pub price: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for inserting a contact (already validated).
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub message: String,
    pub status: String,
    pub price: Option<f64>,
}

/// Client details collected by the public booking and inquiry forms.
///
/// Used to find an existing contact by email or create a new one.
#[derive(Debug, Clone)]
pub struct ClientDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Public payload for `POST /contacts`. `price` may be a number or a
/// numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
    pub price: Option<serde_json::Value>,
}

/// Admin payload for patching the status or price of a contact or booking.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPriceRequest {
    pub status: Option<String>,
    pub price: Option<serde_json::Value>,
}
