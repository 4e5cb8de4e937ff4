//! Repositories for the three booking tables.
//!
//! Every booking row points at a contact. Reads join the contact so the
//! returned record carries `client_name`, `client_email` and `client_phone`
//! alongside the booking columns. Creating a booking resolves (or creates)
//! the contact and inserts the booking in one transaction.

use sqlx::SqlitePool;
use venue_core::types::DbId;

use crate::models::booking::{BookingTable, StatusPriceUpdate};
use crate::models::contact::ClientDetails;
use crate::models::engineering_booking::{CreateEngineeringBooking, EngineeringBooking};
use crate::models::karaoke_hosting::{CreateKaraokeHostingBooking, KaraokeHostingBooking};
use crate::models::performance_booking::{CreatePerformanceBooking, PerformanceBooking};

use super::contact_repo::ContactRepo;

/// Contact columns exposed on every joined booking record.
const CLIENT_COLUMNS: &str = "\
    TRIM(c.first_name || ' ' || c.last_name) AS client_name, \
    c.email AS client_email, c.phone AS client_phone";

pub(crate) fn engineering_select() -> String {
    format!(
        "SELECT b.id, b.contact_id, {CLIENT_COLUMNS}, \
             b.project_name, b.project_manager, b.project_type, \
             b.project_start_date, b.project_end_date, b.project_description, \
             b.special_requests, b.price, b.status, b.created_at \
         FROM engineering_bookings b JOIN contacts c ON c.id = b.contact_id"
    )
}

pub(crate) fn performance_select() -> String {
    format!(
        "SELECT b.id, b.contact_id, {CLIENT_COLUMNS}, \
             b.event_name, b.event_type, b.event_date_time, b.location, \
             b.guests, b.special_requests, b.price, b.status, b.created_at \
         FROM performance_bookings b JOIN contacts c ON c.id = b.contact_id"
    )
}

pub(crate) fn karaoke_hosting_select() -> String {
    format!(
        "SELECT b.id, b.contact_id, {CLIENT_COLUMNS}, \
             b.event_name, b.event_date, b.start_time, b.end_time, b.location, \
             b.guests, b.special_requests, b.price, b.status, b.created_at \
         FROM karaoke_hosting_bookings b JOIN contacts c ON c.id = b.contact_id"
    )
}

// ---------------------------------------------------------------------------
// Shared status / price operations
// ---------------------------------------------------------------------------

/// Operations shared by contacts and the three booking tables.
pub struct BookingRepo;

impl BookingRepo {
    /// Patch status and/or price. Returns `true` if the row exists.
    pub async fn update_status_price(
        pool: &SqlitePool,
        table: BookingTable,
        id: DbId,
        input: &StatusPriceUpdate,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET \
                 status = COALESCE($2, status), \
                 price = COALESCE($3, price) \
             WHERE id = $1",
            table.table_name()
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.price)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a booking row. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &SqlitePool,
        table: BookingTable,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", table.table_name());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Engineering
// ---------------------------------------------------------------------------

pub struct EngineeringBookingRepo;

impl EngineeringBookingRepo {
    /// Resolve the client's contact and insert the booking.
    pub async fn create(
        pool: &SqlitePool,
        client: &ClientDetails,
        input: &CreateEngineeringBooking,
    ) -> Result<EngineeringBooking, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let contact_id = ContactRepo::find_or_create(&mut *tx, client).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO engineering_bookings \
                 (contact_id, project_name, project_manager, project_type, \
                  project_start_date, project_end_date, project_description, \
                  special_requests, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(contact_id)
        .bind(&input.project_name)
        .bind(&input.project_manager)
        .bind(&input.project_type)
        .bind(&input.project_start_date)
        .bind(&input.project_end_date)
        .bind(&input.project_description)
        .bind(&input.special_requests)
        .bind(input.price)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("{} WHERE b.id = $1", engineering_select());
        let booking = sqlx::query_as::<_, EngineeringBooking>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(booking)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<EngineeringBooking>, sqlx::Error> {
        let query = format!("{} WHERE b.id = $1", engineering_select());
        sqlx::query_as::<_, EngineeringBooking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all engineering bookings, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<EngineeringBooking>, sqlx::Error> {
        let query = format!("{} ORDER BY b.created_at DESC, b.id DESC", engineering_select());
        sqlx::query_as::<_, EngineeringBooking>(&query)
            .fetch_all(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Performance
// ---------------------------------------------------------------------------

pub struct PerformanceBookingRepo;

impl PerformanceBookingRepo {
    /// Resolve the client's contact and insert the booking.
    pub async fn create(
        pool: &SqlitePool,
        client: &ClientDetails,
        input: &CreatePerformanceBooking,
    ) -> Result<PerformanceBooking, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let contact_id = ContactRepo::find_or_create(&mut *tx, client).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO performance_bookings \
                 (contact_id, event_name, event_type, event_date_time, location, \
                  guests, special_requests, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(contact_id)
        .bind(&input.event_name)
        .bind(&input.event_type)
        .bind(&input.event_date_time)
        .bind(&input.location)
        .bind(&input.guests)
        .bind(&input.special_requests)
        .bind(input.price)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("{} WHERE b.id = $1", performance_select());
        let booking = sqlx::query_as::<_, PerformanceBooking>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(booking)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PerformanceBooking>, sqlx::Error> {
        let query = format!("{} WHERE b.id = $1", performance_select());
        sqlx::query_as::<_, PerformanceBooking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<PerformanceBooking>, sqlx::Error> {
        let query = format!("{} ORDER BY b.created_at DESC, b.id DESC", performance_select());
        sqlx::query_as::<_, PerformanceBooking>(&query)
            .fetch_all(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Karaoke hosting
// ---------------------------------------------------------------------------

pub struct KaraokeHostingRepo;

impl KaraokeHostingRepo {
    /// Resolve the client's contact and insert the booking.
    pub async fn create(
        pool: &SqlitePool,
        client: &ClientDetails,
        input: &CreateKaraokeHostingBooking,
    ) -> Result<KaraokeHostingBooking, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let contact_id = ContactRepo::find_or_create(&mut *tx, client).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO karaoke_hosting_bookings \
                 (contact_id, event_name, event_date, start_time, end_time, location, \
                  guests, special_requests, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(contact_id)
        .bind(&input.event_name)
        .bind(&input.event_date)
        .bind(&input.start_time)
        .bind(&input.end_time)
        .bind(&input.location)
        .bind(&input.guests)
        .bind(&input.special_requests)
        .bind(input.price)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("{} WHERE b.id = $1", karaoke_hosting_select());
        let booking = sqlx::query_as::<_, KaraokeHostingBooking>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(booking)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<KaraokeHostingBooking>, sqlx::Error> {
        let query = format!("{} WHERE b.id = $1", karaoke_hosting_select());
        sqlx::query_as::<_, KaraokeHostingBooking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<KaraokeHostingBooking>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY b.created_at DESC, b.id DESC",
            karaoke_hosting_select()
        );
        sqlx::query_as::<_, KaraokeHostingBooking>(&query)
            .fetch_all(pool)
            .await
    }
}
