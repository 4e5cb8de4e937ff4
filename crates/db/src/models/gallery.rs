//! Gallery photo models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub photo_type: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryImage {
    pub image_url: String,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub photo_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGalleryImage {
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub photo_type: Option<String>,
}

/// Query filters for `GET /gallery`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryFilter {
    pub category: Option<String>,
    pub photo_type: Option<String>,
}
