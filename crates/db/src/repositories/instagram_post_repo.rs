//! Repository for the `instagram_posts` cache.

use sqlx::SqlitePool;

use crate::models::instagram_post::{InstagramPost, UpsertInstagramPost};

const COLUMNS: &str = "\
    id, external_id, caption, media_type, media_url, permalink, posted_at, fetched_at";

/// Provides data access for cached Instagram media.
pub struct InstagramPostRepo;

impl InstagramPostRepo {
    /// Most recent posts first, at most `limit`.
    pub async fn list(pool: &SqlitePool, limit: i64) -> Result<Vec<InstagramPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM instagram_posts \
             ORDER BY posted_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, InstagramPost>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Insert or refresh every post by `external_id` in one transaction.
    /// Returns the number of rows written.
    pub async fn upsert_many(
        pool: &SqlitePool,
        posts: &[UpsertInstagramPost],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut written = 0;

        for post in posts {
            let result = sqlx::query(
                "INSERT INTO instagram_posts \
                     (external_id, caption, media_type, media_url, permalink, posted_at) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (external_id) DO UPDATE SET \
                     caption = excluded.caption, \
                     media_type = excluded.media_type, \
                     media_url = excluded.media_url, \
                     permalink = excluded.permalink, \
                     posted_at = excluded.posted_at, \
                     fetched_at = CURRENT_TIMESTAMP",
            )
            .bind(&post.external_id)
            .bind(&post.caption)
            .bind(&post.media_type)
            .bind(&post.media_url)
            .bind(&post.permalink)
            .bind(post.posted_at)
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }
}
