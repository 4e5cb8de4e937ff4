//! Repositories for expenses, income, mileage, and the yearly summary.

use sqlx::SqlitePool;
use venue_core::types::DbId;

use crate::models::finance::{
    CreateExpense, CreateIncome, CreateMileageTrip, Expense, Income, MileageTrip, PeriodFilter,
    UpdateExpense, UpdateIncome, UpdateMileageTrip,
};

const EXPENSE_COLUMNS: &str = "\
    id, expense_date, category, description, amount, receipt_url, created_at";

const INCOME_COLUMNS: &str = "id, income_date, source, description, amount, created_at";

const MILEAGE_COLUMNS: &str = "\
    id, trip_date, start_location, end_location, miles, purpose, round_trip, created_at";

/// Build a WHERE clause over `date_col` (and optionally `category`) for a
/// period filter. Placeholders are numbered from `$1`.
fn period_clause(date_col: &str, filter: &PeriodFilter, with_category: bool) -> String {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.year.is_some() {
        conditions.push(format!("strftime('%Y', {date_col}) = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.month.is_some() {
        conditions.push(format!(
            "CAST(strftime('%m', {date_col}) AS INTEGER) = ${bind_idx}"
        ));
        bind_idx += 1;
    }
    if with_category && filter.category.is_some() {
        conditions.push(format!("LOWER(category) = LOWER(${bind_idx})"));
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

/// Bind the period filter values in the order [`period_clause`] numbers
/// them.
macro_rules! bind_period {
    ($q:expr, $filter:expr, $with_category:expr) => {{
        let mut q = $q;
        if let Some(year) = $filter.year {
            q = q.bind(format!("{year:04}"));
        }
        if let Some(month) = $filter.month {
            q = q.bind(i64::from(month));
        }
        if $with_category {
            if let Some(ref category) = $filter.category {
                q = q.bind(category.clone());
            }
        }
        q
    }};
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

pub struct ExpenseRepo;

impl ExpenseRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (expense_date, category, description, amount, receipt_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {EXPENSE_COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(input.expense_date)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.receipt_url)
            .fetch_one(pool)
            .await
    }

    /// Expenses in the period, most recent first.
    pub async fn list(pool: &SqlitePool, filter: &PeriodFilter) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses {} ORDER BY expense_date DESC, id DESC",
            period_clause("expense_date", filter, true)
        );
        let q = bind_period!(sqlx::query_as::<_, Expense>(&query), filter, true);
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET \
                 expense_date = COALESCE($2, expense_date), \
                 category = COALESCE($3, category), \
                 description = COALESCE($4, description), \
                 amount = COALESCE($5, amount), \
                 receipt_url = COALESCE($6, receipt_url) \
             WHERE id = $1 \
             RETURNING {EXPENSE_COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(input.expense_date)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.receipt_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Income
// ---------------------------------------------------------------------------

pub struct IncomeRepo;

impl IncomeRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateIncome) -> Result<Income, sqlx::Error> {
        let query = format!(
            "INSERT INTO incomes (income_date, source, description, amount) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {INCOME_COLUMNS}"
        );
        sqlx::query_as::<_, Income>(&query)
            .bind(input.income_date)
            .bind(&input.source)
            .bind(&input.description)
            .bind(input.amount)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool, filter: &PeriodFilter) -> Result<Vec<Income>, sqlx::Error> {
        let query = format!(
            "SELECT {INCOME_COLUMNS} FROM incomes {} ORDER BY income_date DESC, id DESC",
            period_clause("income_date", filter, false)
        );
        let q = bind_period!(sqlx::query_as::<_, Income>(&query), filter, false);
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateIncome,
    ) -> Result<Option<Income>, sqlx::Error> {
        let query = format!(
            "UPDATE incomes SET \
                 income_date = COALESCE($2, income_date), \
                 source = COALESCE($3, source), \
                 description = COALESCE($4, description), \
                 amount = COALESCE($5, amount) \
             WHERE id = $1 \
             RETURNING {INCOME_COLUMNS}"
        );
        sqlx::query_as::<_, Income>(&query)
            .bind(id)
            .bind(input.income_date)
            .bind(&input.source)
            .bind(&input.description)
            .bind(input.amount)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM incomes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Mileage
// ---------------------------------------------------------------------------

pub struct MileageRepo;

impl MileageRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMileageTrip,
    ) -> Result<MileageTrip, sqlx::Error> {
        let query = format!(
            "INSERT INTO mileage_trips \
                 (trip_date, start_location, end_location, miles, purpose, round_trip) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {MILEAGE_COLUMNS}"
        );
        sqlx::query_as::<_, MileageTrip>(&query)
            .bind(input.trip_date)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.miles)
            .bind(&input.purpose)
            .bind(input.round_trip)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &SqlitePool,
        filter: &PeriodFilter,
    ) -> Result<Vec<MileageTrip>, sqlx::Error> {
        let query = format!(
            "SELECT {MILEAGE_COLUMNS} FROM mileage_trips {} ORDER BY trip_date DESC, id DESC",
            period_clause("trip_date", filter, false)
        );
        let q = bind_period!(sqlx::query_as::<_, MileageTrip>(&query), filter, false);
        q.fetch_all(pool).await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMileageTrip,
    ) -> Result<Option<MileageTrip>, sqlx::Error> {
        let query = format!(
            "UPDATE mileage_trips SET \
                 trip_date = COALESCE($2, trip_date), \
                 start_location = COALESCE($3, start_location), \
                 end_location = COALESCE($4, end_location), \
                 miles = COALESCE($5, miles), \
                 purpose = COALESCE($6, purpose), \
                 round_trip = COALESCE($7, round_trip) \
             WHERE id = $1 \
             RETURNING {MILEAGE_COLUMNS}"
        );
        sqlx::query_as::<_, MileageTrip>(&query)
            .bind(id)
            .bind(input.trip_date)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.miles)
            .bind(&input.purpose)
            .bind(input.round_trip)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mileage_trips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Raw sums feeding [`venue_core::finance::FinanceSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceTotals {
    pub income_total: f64,
    pub expenses_by_category: Vec<(String, f64)>,
    pub total_miles: f64,
}

/// Aggregate reads across the finance tables.
pub struct FinanceRepo;

impl FinanceRepo {
    /// Sum income, expenses per category, and miles for a year (or all time).
    ///
    /// Categories are grouped case-insensitively, matching the list filter.
    pub async fn totals(pool: &SqlitePool, year: Option<i32>) -> Result<FinanceTotals, sqlx::Error> {
        let filter = PeriodFilter {
            year,
            ..PeriodFilter::default()
        };

        let query = format!(
            "SELECT TOTAL(amount) FROM incomes {}",
            period_clause("income_date", &filter, false)
        );
        let income_total = bind_period!(sqlx::query_scalar::<_, f64>(&query), filter, false)
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT MIN(category), TOTAL(amount) AS total FROM expenses {} \
             GROUP BY LOWER(category) ORDER BY LOWER(category)",
            period_clause("expense_date", &filter, false)
        );
        let expenses_by_category =
            bind_period!(sqlx::query_as::<_, (String, f64)>(&query), filter, false)
                .fetch_all(pool)
                .await?;

        let query = format!(
            "SELECT TOTAL(miles) FROM mileage_trips {}",
            period_clause("trip_date", &filter, false)
        );
        let total_miles = bind_period!(sqlx::query_scalar::<_, f64>(&query), filter, false)
            .fetch_one(pool)
            .await?;

        Ok(FinanceTotals {
            income_total,
            expenses_by_category,
            total_miles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_clause_numbers_placeholders_in_order() {
        let filter = PeriodFilter {
            year: Some(2025),
            month: Some(3),
            category: Some("Fuel".into()),
        };
        assert_eq!(
            period_clause("expense_date", &filter, true),
            "WHERE strftime('%Y', expense_date) = $1 \
             AND CAST(strftime('%m', expense_date) AS INTEGER) = $2 \
             AND LOWER(category) = LOWER($3)"
        );
    }

    #[test]
    fn test_period_clause_ignores_category_when_not_applicable() {
        let filter = PeriodFilter {
            year: None,
            month: None,
            category: Some("Fuel".into()),
        };
        assert_eq!(period_clause("income_date", &filter, false), "");
    }
}
