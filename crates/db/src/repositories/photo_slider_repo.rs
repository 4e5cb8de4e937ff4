//! Repository for the `photo_slider_images` table.

use sqlx::SqlitePool;
use venue_core::ordering;
use venue_core::types::DbId;

use crate::models::photo_slider::{CreateSliderImage, SliderImage, UpdateSliderImage};

const COLUMNS: &str = "id, image_url, caption, sort_order, is_active, created_at";

/// Provides data access for the home page slider.
pub struct PhotoSliderRepo;

impl PhotoSliderRepo {
    /// Insert an image after the current last sort order.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateSliderImage,
    ) -> Result<SliderImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_slider_images (image_url, caption, sort_order, is_active) \
             VALUES ($1, $2, \
                     (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM photo_slider_images), \
                     COALESCE($3, 1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SliderImage>(&query)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Active images in display order.
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<SliderImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_slider_images WHERE is_active = 1 \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, SliderImage>(&query).fetch_all(pool).await
    }

    /// Every image in display order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<SliderImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_slider_images ORDER BY sort_order, id");
        sqlx::query_as::<_, SliderImage>(&query).fetch_all(pool).await
    }

    /// Ids of every image in display order.
    pub async fn ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM photo_slider_images ORDER BY sort_order, id")
            .fetch_all(pool)
            .await
    }

    /// Assign sort orders `1..=n` following `ids`.
    ///
    /// The caller is responsible for checking `ids` is a permutation of the
    /// stored ids.
    pub async fn reorder(pool: &SqlitePool, ids: &[DbId]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (id, sort_order) in ordering::sequence(ids) {
            sqlx::query("UPDATE photo_slider_images SET sort_order = $2 WHERE id = $1")
                .bind(id)
                .bind(sort_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSliderImage,
    ) -> Result<Option<SliderImage>, sqlx::Error> {
        let query = format!(
            "UPDATE photo_slider_images SET \
                 image_url = COALESCE($2, image_url), \
                 caption = COALESCE($3, caption), \
                 is_active = COALESCE($4, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SliderImage>(&query)
            .bind(id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photo_slider_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
