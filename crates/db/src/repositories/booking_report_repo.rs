//! Cross-table reads over contacts and the three booking tables.
//!
//! Listings, searches and earnings reports treat a contact as a fourth
//! booking category because contacts carry their own status and price.

use sqlx::SqlitePool;

use crate::models::booking::{BookingCollections, BookingSearch, BookingTable, MonthlyEarnings};
use crate::models::contact::Contact;
use crate::models::engineering_booking::EngineeringBooking;
use crate::models::karaoke_hosting::KaraokeHostingBooking;
use crate::models::performance_booking::PerformanceBooking;

use super::booking_repo::{engineering_select, karaoke_hosting_select, performance_select};
use super::contact_repo::COLUMNS as CONTACT_COLUMNS;
use super::contains_pattern;

/// A WHERE clause plus its string bind values, in placeholder order.
struct Filter {
    clause: String,
    binds: Vec<String>,
}

/// Build `$n, $n+1, ...` placeholders for an IN list starting at `start`.
fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Filter rows whose `status_col` is one of `statuses`.
fn status_filter(status_col: &str, statuses: &[&str]) -> Filter {
    Filter {
        clause: format!("WHERE {status_col} IN ({})", placeholders(1, statuses.len())),
        binds: statuses.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build the search WHERE clause. `c` is always the contact alias and
/// `status_col` the status column of the row being searched.
fn search_filter(search: &BookingSearch, status_col: &str) -> Filter {
    let mut conditions = Vec::new();
    let mut binds = Vec::new();
    let mut bind_idx = 1u32;

    if let Some(ref name) = search.name {
        conditions.push(format!(
            "LOWER(c.first_name || ' ' || c.last_name) LIKE ${bind_idx} ESCAPE '\\'"
        ));
        binds.push(contains_pattern(name));
        bind_idx += 1;
    }
    if let Some(ref phone) = search.phone {
        conditions.push(format!(
            "LOWER(COALESCE(c.phone, '')) LIKE ${bind_idx} ESCAPE '\\'"
        ));
        binds.push(contains_pattern(phone));
        bind_idx += 1;
    }
    if let Some(ref status) = search.status {
        conditions.push(format!("LOWER({status_col}) LIKE ${bind_idx} ESCAPE '\\'"));
        binds.push(contains_pattern(status));
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    Filter { clause, binds }
}

/// Provides the aggregate booking views.
pub struct BookingReportRepo;

impl BookingReportRepo {
    /// Every row of every category, newest first.
    pub async fn all(pool: &SqlitePool) -> Result<BookingCollections, sqlx::Error> {
        Self::collect(pool, |_| Filter {
            clause: String::new(),
            binds: Vec::new(),
        })
        .await
    }

    /// Rows whose status is one of `statuses`.
    pub async fn with_statuses(
        pool: &SqlitePool,
        statuses: &[&str],
    ) -> Result<BookingCollections, sqlx::Error> {
        Self::collect(pool, |status_col| status_filter(status_col, statuses)).await
    }

    /// Case-insensitive substring search on contact name, contact phone and
    /// row status. `None` filters are ignored.
    pub async fn search(
        pool: &SqlitePool,
        search: &BookingSearch,
    ) -> Result<BookingCollections, sqlx::Error> {
        Self::collect(pool, |status_col| search_filter(search, status_col)).await
    }

    /// Sum of `price` per month for rows in `statuses`, per category.
    ///
    /// Months are taken from `created_at`; `year` restricts to one year.
    pub async fn monthly_earnings(
        pool: &SqlitePool,
        statuses: &[&str],
        year: Option<i32>,
    ) -> Result<MonthlyEarnings, sqlx::Error> {
        let mut buckets = Vec::with_capacity(BookingTable::ALL.len());
        for table in BookingTable::ALL {
            let mut query = format!(
                "SELECT CAST(strftime('%m', created_at) AS INTEGER) AS month, \
                        TOTAL(price) AS total \
                 FROM {} \
                 WHERE status IN ({})",
                table.table_name(),
                placeholders(1, statuses.len()),
            );
            if year.is_some() {
                query.push_str(&format!(
                    " AND strftime('%Y', created_at) = ${}",
                    statuses.len() + 1
                ));
            }
            query.push_str(" GROUP BY month");

            let mut q = sqlx::query_as::<_, (i64, f64)>(&query);
            for status in statuses {
                q = q.bind(*status);
            }
            if let Some(year) = year {
                q = q.bind(format!("{year:04}"));
            }
            let rows = q.fetch_all(pool).await?;
            buckets.push(venue_core::booking::monthly_buckets(&rows));
        }

        Ok(MonthlyEarnings {
            year,
            contact_monthly: buckets[0],
            engineering_monthly: buckets[1],
            performance_monthly: buckets[2],
            karaoke_hosting_monthly: buckets[3],
        })
    }

    /// Raw `price` totals for rows in `statuses`, in [`BookingTable::ALL`]
    /// order.
    pub async fn totals(
        pool: &SqlitePool,
        statuses: &[&str],
    ) -> Result<[f64; 4], sqlx::Error> {
        let mut totals = [0.0; 4];
        for (slot, table) in totals.iter_mut().zip(BookingTable::ALL) {
            let query = format!(
                "SELECT TOTAL(price) FROM {} WHERE status IN ({})",
                table.table_name(),
                placeholders(1, statuses.len()),
            );
            let mut q = sqlx::query_scalar::<_, f64>(&query);
            for status in statuses {
                q = q.bind(*status);
            }
            *slot = q.fetch_one(pool).await?;
        }
        Ok(totals)
    }

    /// Run the same filter against every category.
    async fn collect<F>(pool: &SqlitePool, filter: F) -> Result<BookingCollections, sqlx::Error>
    where
        F: Fn(&str) -> Filter,
    {
        let f = filter("c.status");
        let query = format!(
            "SELECT {} FROM contacts c {} ORDER BY c.created_at DESC, c.id DESC",
            prefixed(CONTACT_COLUMNS, "c"),
            f.clause
        );
        let mut q = sqlx::query_as::<_, Contact>(&query);
        for bind in &f.binds {
            q = q.bind(bind);
        }
        let contacts = q.fetch_all(pool).await?;

        let f = filter("b.status");
        let query = format!(
            "{} {} ORDER BY b.created_at DESC, b.id DESC",
            engineering_select(),
            f.clause
        );
        let mut q = sqlx::query_as::<_, EngineeringBooking>(&query);
        for bind in &f.binds {
            q = q.bind(bind);
        }
        let engineering_bookings = q.fetch_all(pool).await?;

        let f = filter("b.status");
        let query = format!(
            "{} {} ORDER BY b.created_at DESC, b.id DESC",
            performance_select(),
            f.clause
        );
        let mut q = sqlx::query_as::<_, PerformanceBooking>(&query);
        for bind in &f.binds {
            q = q.bind(bind);
        }
        let performance_bookings = q.fetch_all(pool).await?;

        let f = filter("b.status");
        let query = format!(
            "{} {} ORDER BY b.created_at DESC, b.id DESC",
            karaoke_hosting_select(),
            f.clause
        );
        let mut q = sqlx::query_as::<_, KaraokeHostingBooking>(&query);
        for bind in &f.binds {
            q = q.bind(bind);
        }
        let karaoke_hosting_bookings = q.fetch_all(pool).await?;

        Ok(BookingCollections {
            contacts,
            engineering_bookings,
            performance_bookings,
            karaoke_hosting_bookings,
        })
    }
}

/// Qualify every column in a comma-separated list with `alias.`.
fn prefixed(columns: &str, alias: &str) -> String {
    columns
        .split(',')
        .map(|col| format!("{alias}.{}", col.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
