//! Repository for the `contacts` table.

use sqlx::{SqliteConnection, SqlitePool};
use venue_core::types::DbId;

use crate::models::contact::{ClientDetails, Contact, CreateContact};

/// Column list for `contacts` queries.
pub(crate) const COLUMNS: &str = "\
    id, first_name, last_name, phone, email, message, status, price, created_at";

/// Provides data access for contacts.
pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (first_name, last_name, phone, email, message, status, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.message)
            .bind(&input.status)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contacts, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Find a contact by case-insensitive email, creating one when none
    /// exists. Returns the contact id.
    ///
    /// Takes a connection so callers can run it inside the transaction that
    /// inserts the booking or inquiry.
    pub async fn find_or_create(
        conn: &mut SqliteConnection,
        client: &ClientDetails,
    ) -> Result<DbId, sqlx::Error> {
        let existing: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM contacts WHERE LOWER(email) = LOWER($1) ORDER BY id LIMIT 1",
        )
        .bind(&client.email)
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(id) = existing {
            // Keep the newest phone number on file.
            if client.phone.is_some() {
                sqlx::query("UPDATE contacts SET phone = $2 WHERE id = $1")
                    .bind(id)
                    .bind(&client.phone)
                    .execute(&mut *conn)
                    .await?;
            }
            return Ok(id);
        }

        sqlx::query_scalar(
            "INSERT INTO contacts (first_name, last_name, phone, email) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.phone)
        .bind(&client.email)
        .fetch_one(&mut *conn)
        .await
    }

    /// Whether any booking or inquiry still points at the contact.
    pub async fn is_referenced(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT \
                 (SELECT COUNT(*) FROM engineering_bookings WHERE contact_id = $1) + \
                 (SELECT COUNT(*) FROM performance_bookings WHERE contact_id = $1) + \
                 (SELECT COUNT(*) FROM karaoke_hosting_bookings WHERE contact_id = $1) + \
                 (SELECT COUNT(*) FROM general_inquiries WHERE contact_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }

    /// Delete a contact. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation when the contact is referenced.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
