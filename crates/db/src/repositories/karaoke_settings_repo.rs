//! Repository for the singleton `karaoke_settings` row.

use sqlx::SqlitePool;

use crate::models::karaoke::KaraokeSettings;

const COLUMNS: &str = "pin_enabled, pin_hash, updated_at";

/// Provides access to the karaoke PIN gate.
pub struct KaraokeSettingsRepo;

impl KaraokeSettingsRepo {
    /// Load the settings row (seeded by the migration).
    pub async fn get(pool: &SqlitePool) -> Result<KaraokeSettings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM karaoke_settings WHERE id = 1");
        sqlx::query_as::<_, KaraokeSettings>(&query)
            .fetch_one(pool)
            .await
    }

    /// Set the gate. A `None` hash keeps the stored PIN.
    pub async fn update(
        pool: &SqlitePool,
        pin_enabled: bool,
        pin_hash: Option<&str>,
    ) -> Result<KaraokeSettings, sqlx::Error> {
        let query = format!(
            "UPDATE karaoke_settings SET \
                 pin_enabled = $1, \
                 pin_hash = COALESCE($2, pin_hash), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KaraokeSettings>(&query)
            .bind(pin_enabled)
            .bind(pin_hash)
            .fetch_one(pool)
            .await
    }
}
