//! Repository for the `reviews` table.

use sqlx::SqlitePool;
use venue_core::types::DbId;

use crate::models::review::{CreateReview, Review, UpdateReview};

use super::contains_pattern;

const COLUMNS: &str = "\
    id, name, rating, service, image_url, website_url, description, \
    is_approved, created_at";

/// Provides data access for customer reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review. Reviews start unapproved.
    pub async fn create(pool: &SqlitePool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (name, rating, service, image_url, website_url, description) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.name)
            .bind(input.rating)
            .bind(&input.service)
            .bind(&input.image_url)
            .bind(&input.website_url)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List approved reviews, newest first, optionally filtered by a
    /// case-insensitive substring of `service`.
    pub async fn list_approved(
        pool: &SqlitePool,
        service: Option<&str>,
    ) -> Result<Vec<Review>, sqlx::Error> {
        match service {
            Some(service) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM reviews \
                     WHERE is_approved = 1 AND LOWER(service) LIKE $1 ESCAPE '\\' \
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Review>(&query)
                    .bind(contains_pattern(service))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM reviews WHERE is_approved = 1 \
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
            }
        }
    }

    /// List every review including pending ones, newest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Average rating of approved reviews, or `None` when there are none.
    pub async fn average_rating(pool: &SqlitePool) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar("SELECT AVG(rating) FROM reviews WHERE is_approved = 1")
            .fetch_one(pool)
            .await
    }

    /// Moderate a review. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET is_approved = COALESCE($2, is_approved) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(input.is_approved)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
