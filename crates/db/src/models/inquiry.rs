//! General inquiry models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// An inquiry joined with its contact's name, email, and phone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub contact_id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Public form payload for `POST /inquiries`.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Insert DTO. The contact is resolved from the client details.
#[derive(Debug, Clone)]
pub struct CreateInquiry {
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInquiry {
    pub status: String,
}
