//! Repository for the singleton `music_break_state` row.

use sqlx::SqlitePool;

use crate::models::music_break::MusicBreak;

const COLUMNS: &str = "is_active, message, started_at, updated_at";

pub struct MusicBreakRepo;

impl MusicBreakRepo {
    pub async fn get(pool: &SqlitePool) -> Result<MusicBreak, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM music_break_state WHERE id = 1");
        sqlx::query_as::<_, MusicBreak>(&query).fetch_one(pool).await
    }

    /// Turn the break on or off.
    ///
    /// `started_at` is stamped when the break starts, kept while it stays
    /// on, and cleared when it ends.
    pub async fn set(
        pool: &SqlitePool,
        is_active: bool,
        message: Option<&str>,
    ) -> Result<MusicBreak, sqlx::Error> {
        let query = format!(
            "UPDATE music_break_state SET \
                 started_at = CASE \
                     WHEN $1 = 1 AND is_active = 1 THEN started_at \
                     WHEN $1 = 1 THEN CURRENT_TIMESTAMP \
                     ELSE NULL END, \
                 is_active = $1, \
                 message = $2, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MusicBreak>(&query)
            .bind(is_active)
            .bind(message)
            .fetch_one(pool)
            .await
    }
}
