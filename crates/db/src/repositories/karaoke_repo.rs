//! Repository for the `karaoke_signups` queue.
//!
//! Active entries (`is_deleted = 0`) always carry positions `1..=n`. Every
//! mutation that changes membership or order runs in a transaction and
//! rewrites the positions of the whole active queue before committing.

use sqlx::{SqliteConnection, SqlitePool};
use venue_core::karaoke::{self, QueueMove};
use venue_core::ordering;
use venue_core::types::{DbId, Timestamp};

use crate::models::karaoke::{CreateKaraokeSignup, KaraokeSignup, UpdateKaraokeSignup};

const COLUMNS: &str = "\
    id, singer_name, song_title, artist, notes, position, is_flagged, \
    is_deleted, deleted_at, created_at";

/// Provides data access for the karaoke signup queue.
pub struct KaraokeRepo;

impl KaraokeRepo {
    /// Append a signup at position `n + 1`.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateKaraokeSignup,
    ) -> Result<KaraokeSignup, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let position = Self::next_position(&mut *tx).await?;

        let query = format!(
            "INSERT INTO karaoke_signups (singer_name, song_title, artist, notes, position) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let signup = sqlx::query_as::<_, KaraokeSignup>(&query)
            .bind(&input.singer_name)
            .bind(&input.song_title)
            .bind(&input.artist)
            .bind(&input.notes)
            .bind(position)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(signup)
    }

    /// The active queue ordered by position.
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<KaraokeSignup>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM karaoke_signups WHERE is_deleted = 0 \
             ORDER BY position, id"
        );
        sqlx::query_as::<_, KaraokeSignup>(&query).fetch_all(pool).await
    }

    /// Soft-deleted entries, most recently deleted first.
    pub async fn list_deleted(pool: &SqlitePool) -> Result<Vec<KaraokeSignup>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM karaoke_signups WHERE is_deleted = 1 \
             ORDER BY deleted_at DESC, id DESC"
        );
        sqlx::query_as::<_, KaraokeSignup>(&query).fetch_all(pool).await
    }

    /// Edit the text fields or flag of an entry.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateKaraokeSignup,
    ) -> Result<Option<KaraokeSignup>, sqlx::Error> {
        let query = format!(
            "UPDATE karaoke_signups SET \
                 singer_name = COALESCE($2, singer_name), \
                 song_title = COALESCE($3, song_title), \
                 artist = COALESCE($4, artist), \
                 notes = COALESCE($5, notes), \
                 is_flagged = COALESCE($6, is_flagged) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KaraokeSignup>(&query)
            .bind(id)
            .bind(&input.singer_name)
            .bind(&input.song_title)
            .bind(&input.artist)
            .bind(&input.notes)
            .bind(input.is_flagged)
            .fetch_optional(pool)
            .await
    }

    /// Move one active entry. Returns `None` when `id` is not in the active
    /// queue, otherwise the re-sequenced queue.
    pub async fn move_entry(
        pool: &SqlitePool,
        id: DbId,
        movement: QueueMove,
    ) -> Result<Option<Vec<KaraokeSignup>>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let order = Self::active_order(&mut *tx).await?;

        let Some(new_order) = movement.apply(&order, id) else {
            return Ok(None);
        };
        Self::write_positions(&mut *tx, &new_order).await?;
        tx.commit().await?;

        Self::list_active(pool).await.map(Some)
    }

    /// Re-sequence the active queue by signup time (ties broken by id).
    pub async fn sort_by_time(pool: &SqlitePool) -> Result<Vec<KaraokeSignup>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let entries: Vec<(DbId, Timestamp)> =
            sqlx::query_as("SELECT id, created_at FROM karaoke_signups WHERE is_deleted = 0")
                .fetch_all(&mut *tx)
                .await?;

        let order = karaoke::order_by_signup_time(&entries);
        Self::write_positions(&mut *tx, &order).await?;
        tx.commit().await?;

        Self::list_active(pool).await
    }

    /// Soft-delete an active entry and close the gap it leaves.
    ///
    /// Returns `false` when `id` is not in the active queue.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE karaoke_signups SET \
                 is_deleted = 1, deleted_at = CURRENT_TIMESTAMP, position = 0 \
             WHERE id = $1 AND is_deleted = 0",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        let order = Self::active_order(&mut *tx).await?;
        Self::write_positions(&mut *tx, &order).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Bring a soft-deleted entry back at the end of the queue.
    ///
    /// Returns `None` when `id` is not a deleted entry.
    pub async fn restore(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<KaraokeSignup>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let position = Self::next_position(&mut *tx).await?;

        let query = format!(
            "UPDATE karaoke_signups SET \
                 is_deleted = 0, deleted_at = NULL, position = $2 \
             WHERE id = $1 AND is_deleted = 1 \
             RETURNING {COLUMNS}"
        );
        let restored = sqlx::query_as::<_, KaraokeSignup>(&query)
            .bind(id)
            .bind(position)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(restored)
    }

    /// Soft-delete the whole active queue. Returns the number of entries
    /// removed.
    pub async fn clear(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE karaoke_signups SET \
                 is_deleted = 1, deleted_at = CURRENT_TIMESTAMP, position = 0 \
             WHERE is_deleted = 0",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Active ids in queue order.
    async fn active_order(conn: &mut SqliteConnection) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM karaoke_signups WHERE is_deleted = 0 ORDER BY position, id",
        )
        .fetch_all(&mut *conn)
        .await
    }

    async fn next_position(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(MAX(position), 0) + 1 FROM karaoke_signups WHERE is_deleted = 0",
        )
        .fetch_one(&mut *conn)
        .await
    }

    /// Write positions `1..=n` following `order`.
    async fn write_positions(
        conn: &mut SqliteConnection,
        order: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for (id, position) in ordering::sequence(order) {
            sqlx::query("UPDATE karaoke_signups SET position = $2 WHERE id = $1")
                .bind(id)
                .bind(position)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }
}
