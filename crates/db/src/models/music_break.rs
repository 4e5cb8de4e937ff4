//! Music break alert shown on the DJ booth screen.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::Timestamp;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MusicBreak {
    pub is_active: bool,
    pub message: Option<String>,
    pub started_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetMusicBreak {
    pub is_active: bool,
    pub message: Option<String>,
}
