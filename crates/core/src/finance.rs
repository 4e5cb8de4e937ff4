//! Expense, income and mileage arithmetic.

use serde::Serialize;

use crate::booking::round_cents;
use crate::error::CoreError;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Default per-mile deduction rate in dollars.
pub const DEFAULT_MILEAGE_RATE: f64 = 0.70;

/// Maximum length of expense categories and income sources.
pub const MAX_LABEL_LENGTH: usize = 80;

/// Convert a distance in meters to miles, rounded to one decimal place.
pub fn meters_to_miles(meters: f64) -> f64 {
    ((meters / METERS_PER_MILE) * 10.0).round() / 10.0
}

/// Miles driven for a trip, doubling one-way distance for round trips.
pub fn trip_miles(one_way: f64, round_trip: bool) -> f64 {
    if round_trip {
        one_way * 2.0
    } else {
        one_way
    }
}

/// Validate a `?month=` filter.
pub fn validate_month(month: u32) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

/// Validate a `?year=` filter.
pub fn validate_year(year: i32) -> Result<(), CoreError> {
    if !(1900..=9999).contains(&year) {
        return Err(CoreError::Validation(format!("Invalid year {year}")));
    }
    Ok(())
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Yearly (or all-time) profit-and-loss summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub year: Option<i32>,
    pub income_total: f64,
    pub expense_total: f64,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub total_miles: f64,
    pub mileage_rate: f64,
    pub mileage_deduction: f64,
    pub net: f64,
}

impl FinanceSummary {
    /// Compute the summary; every money figure is rounded to cents.
    pub fn compute(
        year: Option<i32>,
        income_total: f64,
        expenses_by_category: Vec<(String, f64)>,
        total_miles: f64,
        mileage_rate: f64,
    ) -> Self {
        let expense_total: f64 = expenses_by_category.iter().map(|(_, t)| t).sum();
        let mileage_deduction = total_miles * mileage_rate;
        let net = income_total - expense_total - mileage_deduction;

        Self {
            year,
            income_total: round_cents(income_total),
            expense_total: round_cents(expense_total),
            expenses_by_category: expenses_by_category
                .into_iter()
                .map(|(category, total)| CategoryTotal {
                    category,
                    total: round_cents(total),
                })
                .collect(),
            total_miles: (total_miles * 10.0).round() / 10.0,
            mileage_rate,
            mileage_deduction: round_cents(mileage_deduction),
            net: round_cents(net),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_miles() {
        assert_eq!(meters_to_miles(1609.344), 1.0);
        assert_eq!(meters_to_miles(16093.44), 10.0);
        assert_eq!(meters_to_miles(0.0), 0.0);
        assert_eq!(meters_to_miles(2414.016), 1.5);
    }

    #[test]
    fn test_trip_miles() {
        assert_eq!(trip_miles(12.5, false), 12.5);
        assert_eq!(trip_miles(12.5, true), 25.0);
    }

    #[test]
    fn test_month_and_year_filters() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
        assert!(validate_year(2025).is_ok());
        assert!(validate_year(20).is_err());
    }

    #[test]
    fn test_summary_net_subtracts_expenses_and_mileage() {
        let summary = FinanceSummary::compute(
            Some(2025),
            1000.0,
            vec![("Equipment".into(), 200.0), ("Fuel".into(), 50.256)],
            100.0,
            0.70,
        );
        assert_eq!(summary.expense_total, 250.26);
        assert_eq!(summary.mileage_deduction, 70.0);
        assert_eq!(summary.net, 679.74);
        assert_eq!(summary.expenses_by_category[1].total, 50.26);
    }

    #[test]
    fn test_summary_with_no_activity() {
        let summary = FinanceSummary::compute(None, 0.0, vec![], 0.0, DEFAULT_MILEAGE_RATE);
        assert_eq!(summary.net, 0.0);
        assert!(summary.expenses_by_category.is_empty());
    }
}
