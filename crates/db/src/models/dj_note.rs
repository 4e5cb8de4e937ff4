//! DJ note models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DjNote {
    pub id: DbId,
    pub content: String,
    pub alert_at: Option<Timestamp>,
    pub is_complete: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDjNote {
    pub content: String,
    pub alert_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDjNote {
    pub content: Option<String>,
    pub alert_at: Option<Timestamp>,
    pub is_complete: Option<bool>,
}
