//! Repository for the `promotions` table.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use venue_core::promotion;
use venue_core::types::DbId;

use crate::models::promotion::{CreatePromotion, Promotion, UpdatePromotion};

const COLUMNS: &str = "\
    id, title, description, promo_code, start_date, end_date, is_active, created_at";

/// Provides data access for promotions.
pub struct PromotionRepo;

impl PromotionRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &CreatePromotion,
    ) -> Result<Promotion, sqlx::Error> {
        let query = format!(
            "INSERT INTO promotions \
                 (title, description, promo_code, start_date, end_date, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.promo_code)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM promotions WHERE id = $1");
        sqlx::query_as::<_, Promotion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every promotion, newest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Promotion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM promotions ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Promotion>(&query).fetch_all(pool).await
    }

    /// Active promotions whose date window contains `today`.
    pub async fn list_running(
        pool: &SqlitePool,
        today: NaiveDate,
    ) -> Result<Vec<Promotion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM promotions WHERE is_active = 1 \
             ORDER BY start_date, id"
        );
        let rows = sqlx::query_as::<_, Promotion>(&query).fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|p| promotion::is_running(p.is_active, p.start_date, p.end_date, today))
            .collect())
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdatePromotion,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        let query = format!(
            "UPDATE promotions SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 promo_code = COALESCE($4, promo_code), \
                 start_date = COALESCE($5, start_date), \
                 end_date = COALESCE($6, end_date), \
                 is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.promo_code)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
