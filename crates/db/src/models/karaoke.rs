//! Karaoke signup queue and PIN settings models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// A row from the `karaoke_signups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KaraokeSignup {
    pub id: DbId,
    pub singer_name: String,
    pub song_title: String,
    pub artist: Option<String>,
    pub notes: Option<String>,
    pub position: i64,
    pub is_flagged: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Public signup payload. `pin` is only checked when PIN gating is on.
#[derive(Debug, Clone, Deserialize)]
pub struct KaraokeSignupRequest {
    pub singer_name: String,
    pub song_title: String,
    pub artist: Option<String>,
    pub notes: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateKaraokeSignup {
    pub singer_name: String,
    pub song_title: String,
    pub artist: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateKaraokeSignup {
    pub singer_name: Option<String>,
    pub song_title: Option<String>,
    pub artist: Option<String>,
    pub notes: Option<String>,
    pub is_flagged: Option<bool>,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The singleton `karaoke_settings` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KaraokeSettings {
    pub pin_enabled: bool,
    #[serde(skip_serializing)]
    pub pin_hash: Option<String>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateKaraokeSettings {
    pub pin_enabled: bool,
    pub pin: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPin {
    pub pin: String,
}
