//! Bookkeeping models: expenses, income, and mileage trips.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venue_core::types::{DbId, Timestamp};

/// Period filters shared by the finance listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeriodFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub expense_date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub receipt_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub expense_date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub receipt_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub expense_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub receipt_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Income
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Income {
    pub id: DbId,
    pub income_date: NaiveDate,
    pub source: String,
    pub description: Option<String>,
    pub amount: f64,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateIncome {
    pub income_date: NaiveDate,
    pub source: String,
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIncome {
    pub income_date: Option<NaiveDate>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

// ---------------------------------------------------------------------------
// Mileage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MileageTrip {
    pub id: DbId,
    pub trip_date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub miles: f64,
    pub purpose: Option<String>,
    pub round_trip: bool,
    pub created_at: Timestamp,
}

/// Payload for `POST /mileage`. When `miles` is absent the one-way distance
/// is looked up between the two locations.
#[derive(Debug, Clone, Deserialize)]
pub struct MileageRequest {
    pub trip_date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub miles: Option<f64>,
    pub purpose: Option<String>,
    #[serde(default)]
    pub round_trip: bool,
}

/// Insert DTO with the final (possibly doubled) mileage.
#[derive(Debug, Clone)]
pub struct CreateMileageTrip {
    pub trip_date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub miles: f64,
    pub purpose: Option<String>,
    pub round_trip: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMileageTrip {
    pub trip_date: Option<NaiveDate>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub miles: Option<f64>,
    pub purpose: Option<String>,
    pub round_trip: Option<bool>,
}
