//! Booking status rules and earnings helpers.
//!
//! Contacts, engineering bookings, performance bookings and karaoke hosting
//! bookings all share one status vocabulary. Earnings reports sum `price`
//! over subsets of those statuses.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_BOOKED: &str = "Booked";
pub const STATUS_BOOKED_PAID: &str = "Booked & Paid";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_CANCELLED: &str = "Cancelled";

/// All valid booking status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_BOOKED,
    STATUS_BOOKED_PAID,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Statuses listed by the "booked" dashboard view.
pub const BOOKED_STATUSES: &[&str] = &[STATUS_BOOKED, STATUS_BOOKED_PAID];

/// Statuses that count toward earned revenue.
pub const EARNING_STATUSES: &[&str] = &[STATUS_BOOKED, STATUS_BOOKED_PAID, STATUS_COMPLETED];

/// Statuses whose money has been (or is being) collected.
pub const PAID_STATUSES: &[&str] = &[STATUS_BOOKED_PAID, STATUS_COMPLETED];

/// Inquiry statuses.
pub const INQUIRY_STATUS_NEW: &str = "New";
pub const VALID_INQUIRY_STATUSES: &[&str] = &[INQUIRY_STATUS_NEW, "Responded", "Closed"];

/// Maximum length of a phone number column.
pub const MAX_PHONE_LENGTH: usize = 15;

/* --------------------------------------------------------------------------
Validation
-------------------------------------------------------------------------- */

/// Validate that a status is one of [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate that an inquiry status is one of [`VALID_INQUIRY_STATUSES`].
pub fn validate_inquiry_status(status: &str) -> Result<(), CoreError> {
    if VALID_INQUIRY_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid inquiry status '{status}'. Must be one of: {}",
            VALID_INQUIRY_STATUSES.join(", ")
        )))
    }
}

/// Split a single "client name" field into `(first, last)`.
///
/// The first whitespace-separated word becomes the first name; the rest
/// (possibly empty) is the last name.
pub fn split_client_name(name: &str) -> (String, String) {
    let trimmed = name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

/// Join first and last name the way booking records display them.
pub fn display_name(first: &str, last: &str) -> String {
    if last.is_empty() {
        first.to_string()
    } else {
        format!("{first} {last}")
    }
}

/* --------------------------------------------------------------------------
Earnings
-------------------------------------------------------------------------- */

/// Round a currency value to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-category totals for an earnings report.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct EarningsTotals {
    pub contact_total: f64,
    pub engineering_total: f64,
    pub performance_total: f64,
    pub karaoke_hosting_total: f64,
    pub grand_total: f64,
}

impl EarningsTotals {
    /// Build a report from raw sums, rounding every figure to cents.
    ///
    /// The grand total is summed before rounding.
    pub fn from_sums(contact: f64, engineering: f64, performance: f64, karaoke: f64) -> Self {
        Self {
            contact_total: round_cents(contact),
            engineering_total: round_cents(engineering),
            performance_total: round_cents(performance),
            karaoke_hosting_total: round_cents(karaoke),
            grand_total: round_cents(contact + engineering + performance + karaoke),
        }
    }
}

/// Fold `(month, sum)` rows into twelve monthly buckets (January first).
///
/// Months outside `1..=12` are ignored.
pub fn monthly_buckets(rows: &[(i64, f64)]) -> [f64; 12] {
    let mut buckets = [0.0; 12];
    for &(month, sum) in rows {
        if (1..=12).contains(&month) {
            buckets[(month - 1) as usize] += sum;
        }
    }
    buckets
}
