//! Repository for the `gallery` table.

use sqlx::SqlitePool;
use venue_core::types::DbId;

use crate::models::gallery::{CreateGalleryImage, GalleryFilter, GalleryImage, UpdateGalleryImage};

const COLUMNS: &str = "id, image_url, caption, category, photo_type, created_at";

/// Provides data access for gallery photos.
pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateGalleryImage,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery (image_url, caption, category, photo_type) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(&input.category)
            .bind(&input.photo_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery WHERE id = $1");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List photos, newest first, optionally narrowed by category and
    /// photo type (case-insensitive exact matches).
    pub async fn list(
        pool: &SqlitePool,
        filter: &GalleryFilter,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category.is_some() {
            conditions.push(format!("LOWER(category) = LOWER(${bind_idx})"));
            bind_idx += 1;
        }
        if filter.photo_type.is_some() {
            conditions.push(format!("LOWER(photo_type) = LOWER(${bind_idx})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM gallery {where_clause} ORDER BY created_at DESC, id DESC"
        );
        let mut q = sqlx::query_as::<_, GalleryImage>(&query);
        if let Some(ref category) = filter.category {
            q = q.bind(category);
        }
        if let Some(ref photo_type) = filter.photo_type {
            q = q.bind(photo_type);
        }
        q.fetch_all(pool).await
    }

    /// Update a photo. Only non-`None` fields are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery SET \
                 image_url = COALESCE($2, image_url), \
                 caption = COALESCE($3, caption), \
                 category = COALESCE($4, category), \
                 photo_type = COALESCE($5, photo_type) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(&input.category)
            .bind(&input.photo_type)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
