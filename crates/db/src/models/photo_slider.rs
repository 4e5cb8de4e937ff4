//! Home page photo slider models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SliderImage {
    pub id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// New images are appended after the current last sort order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSliderImage {
    pub image_url: String,
    pub caption: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSliderImage {
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub is_active: Option<bool>,
}

/// Body of `PUT /photo-slider/order`: every image id in display order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderSlider {
    pub ids: Vec<DbId>,
}
