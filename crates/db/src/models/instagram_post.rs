//! Cached Instagram media.

use serde::Serialize;
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstagramPost {
    pub id: DbId,
    pub external_id: String,
    pub caption: Option<String>,
    pub media_type: String,
    pub media_url: Option<String>,
    pub permalink: Option<String>,
    pub posted_at: Option<Timestamp>,
    pub fetched_at: Timestamp,
}

/// One media item as returned by the Graph API, ready to upsert.
#[derive(Debug, Clone)]
pub struct UpsertInstagramPost {
    pub external_id: String,
    pub caption: Option<String>,
    pub media_type: String,
    pub media_url: Option<String>,
    pub permalink: Option<String>,
    pub posted_at: Option<Timestamp>,
}
