//! Repository for the `general_inquiries` table.

use sqlx::SqlitePool;
use venue_core::types::DbId;

use crate::models::contact::ClientDetails;
use crate::models::inquiry::{CreateInquiry, Inquiry};

use super::contact_repo::ContactRepo;

fn select() -> &'static str {
    "SELECT i.id, i.contact_id, \
         TRIM(c.first_name || ' ' || c.last_name) AS client_name, \
         c.email AS client_email, c.phone AS client_phone, \
         i.subject, i.message, i.status, i.created_at \
     FROM general_inquiries i JOIN contacts c ON c.id = i.contact_id"
}

/// Provides data access for general inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Resolve the sender's contact and insert the inquiry.
    pub async fn create(
        pool: &SqlitePool,
        client: &ClientDetails,
        input: &CreateInquiry,
    ) -> Result<Inquiry, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let contact_id = ContactRepo::find_or_create(&mut *tx, client).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO general_inquiries (contact_id, subject, message) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(contact_id)
        .bind(&input.subject)
        .bind(&input.message)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("{} WHERE i.id = $1", select());
        let inquiry = sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(inquiry)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("{} WHERE i.id = $1", select());
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inquiries, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!("{} ORDER BY i.created_at DESC, i.id DESC", select());
        sqlx::query_as::<_, Inquiry>(&query).fetch_all(pool).await
    }

    /// Set the inquiry status. Returns `None` if the inquiry does not exist.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Inquiry>, sqlx::Error> {
        let result = sqlx::query("UPDATE general_inquiries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM general_inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
