//! Repository for the `dj_notes` table.

use sqlx::SqlitePool;
use venue_core::types::DbId;

use crate::models::dj_note::{CreateDjNote, DjNote, UpdateDjNote};

const COLUMNS: &str = "id, content, alert_at, is_complete, created_at";

/// Provides data access for DJ booth notes.
pub struct DjNoteRepo;

impl DjNoteRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateDjNote) -> Result<DjNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO dj_notes (content, alert_at) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DjNote>(&query)
            .bind(&input.content)
            .bind(input.alert_at)
            .fetch_one(pool)
            .await
    }

    /// List notes, oldest first. Completed notes are skipped unless
    /// `include_complete` is set.
    pub async fn list(
        pool: &SqlitePool,
        include_complete: bool,
    ) -> Result<Vec<DjNote>, sqlx::Error> {
        let query = if include_complete {
            format!("SELECT {COLUMNS} FROM dj_notes ORDER BY created_at, id")
        } else {
            format!("SELECT {COLUMNS} FROM dj_notes WHERE is_complete = 0 ORDER BY created_at, id")
        };
        sqlx::query_as::<_, DjNote>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDjNote,
    ) -> Result<Option<DjNote>, sqlx::Error> {
        let query = format!(
            "UPDATE dj_notes SET \
                 content = COALESCE($2, content), \
                 alert_at = COALESCE($3, alert_at), \
                 is_complete = COALESCE($4, is_complete) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DjNote>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.alert_at)
            .bind(input.is_complete)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dj_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
