//! Review models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub name: String,
    pub rating: f64,
    pub service: String,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub description: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a review (already validated).
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub name: String,
    pub rating: f64,
    pub service: String,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub description: String,
}

/// Public payload for `POST /reviews`. Every field is optional at the
/// serde level so a missing field produces the combined error message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRequest {
    pub name: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub service: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
}

/// DTO for moderating a review.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReview {
    pub is_approved: Option<bool>,
}
