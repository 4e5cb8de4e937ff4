//! Handlers for bookkeeping: expenses, income, mileage trips, and the
//! profit-and-loss summary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use venue_core::error::CoreError;
use venue_core::finance::{
    trip_miles, validate_month, validate_year, FinanceSummary, MAX_LABEL_LENGTH,
};
use venue_core::types::DbId;
use venue_core::validation::{
    normalize_filter, require_non_empty, trim_if_present, validate_max_length,
    validate_non_negative,
};
use venue_db::models::finance::{
    CreateExpense, CreateIncome, CreateMileageTrip, MileageRequest, PeriodFilter, UpdateExpense,
    UpdateIncome, UpdateMileageTrip,
};
use venue_db::repositories::{ExpenseRepo, FinanceRepo, IncomeRepo, MileageRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{DistanceParams, YearParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Raw distance lookup result.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub origin: String,
    pub destination: String,
    pub miles: f64,
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Validate period filters and drop a blank category.
fn normalize_period(filter: PeriodFilter) -> Result<PeriodFilter, CoreError> {
    if let Some(year) = filter.year {
        validate_year(year)?;
    }
    if let Some(month) = filter.month {
        validate_month(month)?;
    }
    Ok(PeriodFilter {
        category: normalize_filter(filter.category.as_deref()),
        ..filter
    })
}

fn validate_label(field: &str, value: &str) -> Result<(), CoreError> {
    require_non_empty(field, value)?;
    validate_max_length(field, value, MAX_LABEL_LENGTH)
}

/// Look up the one-way distance between two places.
async fn lookup_miles(state: &AppState, origin: &str, destination: &str) -> AppResult<f64> {
    let lookup = state.distance.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Distance lookup is not configured".into())
    })?;
    Ok(lookup.distance_miles(origin, destination).await?)
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

/// GET /api/v1/expenses?year=&month=&category=
pub async fn list_expenses(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PeriodFilter>,
) -> AppResult<impl IntoResponse> {
    let filter = normalize_period(params)?;
    let expenses = ExpenseRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: expenses }))
}

/// POST /api/v1/expenses
pub async fn create_expense(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateExpense>,
) -> AppResult<impl IntoResponse> {
    input.category = input.category.trim().to_string();
    validate_label("category", &input.category)?;
    validate_non_negative("amount", input.amount)?;

    let expense = ExpenseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        expense_id = expense.id,
        category = %expense.category,
        amount = expense.amount,
        user_id = admin.user_id,
        "Expense recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: expense })))
}

/// PATCH /api/v1/expenses/{id}
pub async fn update_expense(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateExpense>,
) -> AppResult<impl IntoResponse> {
    trim_if_present("category", &mut input.category)?;
    if let Some(category) = &input.category {
        validate_label("category", category)?;
    }
    if let Some(amount) = input.amount {
        validate_non_negative("amount", amount)?;
    }

    let expense = ExpenseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Expense", id))?;

    tracing::info!(expense_id = id, user_id = admin.user_id, "Expense updated");
    Ok(Json(DataResponse { data: expense }))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete_expense(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ExpenseRepo::delete(&state.pool, id).await? {
        return Err(not_found("Expense", id));
    }
    tracing::info!(expense_id = id, user_id = admin.user_id, "Expense deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Income
// ---------------------------------------------------------------------------

/// GET /api/v1/income?year=&month=
pub async fn list_income(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PeriodFilter>,
) -> AppResult<impl IntoResponse> {
    let filter = normalize_period(params)?;
    let income = IncomeRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: income }))
}

/// POST /api/v1/income
pub async fn create_income(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateIncome>,
) -> AppResult<impl IntoResponse> {
    input.source = input.source.trim().to_string();
    validate_label("source", &input.source)?;
    validate_non_negative("amount", input.amount)?;

    let income = IncomeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        income_id = income.id,
        source = %income.source,
        amount = income.amount,
        user_id = admin.user_id,
        "Income recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: income })))
}

/// PATCH /api/v1/income/{id}
pub async fn update_income(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateIncome>,
) -> AppResult<impl IntoResponse> {
    trim_if_present("source", &mut input.source)?;
    if let Some(source) = &input.source {
        validate_label("source", source)?;
    }
    if let Some(amount) = input.amount {
        validate_non_negative("amount", amount)?;
    }

    let income = IncomeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Income", id))?;

    tracing::info!(income_id = id, user_id = admin.user_id, "Income updated");
    Ok(Json(DataResponse { data: income }))
}

/// DELETE /api/v1/income/{id}
pub async fn delete_income(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !IncomeRepo::delete(&state.pool, id).await? {
        return Err(not_found("Income", id));
    }
    tracing::info!(income_id = id, user_id = admin.user_id, "Income deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Mileage
// ---------------------------------------------------------------------------

/// GET /api/v1/mileage?year=&month=
pub async fn list_mileage(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PeriodFilter>,
) -> AppResult<impl IntoResponse> {
    let filter = normalize_period(params)?;
    let trips = MileageRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: trips }))
}

/// POST /api/v1/mileage
///
/// Without `miles`, the one-way distance is looked up. Round trips store
/// twice the one-way distance.
pub async fn create_mileage(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<MileageRequest>,
) -> AppResult<impl IntoResponse> {
    let start_location = input.start_location.trim().to_string();
    let end_location = input.end_location.trim().to_string();
    require_non_empty("start_location", &start_location)?;
    require_non_empty("end_location", &end_location)?;

    let one_way = match input.miles {
        Some(miles) => {
            validate_non_negative("miles", miles)?;
            miles
        }
        None => lookup_miles(&state, &start_location, &end_location).await?,
    };

    let create = CreateMileageTrip {
        trip_date: input.trip_date,
        start_location,
        end_location,
        miles: trip_miles(one_way, input.round_trip),
        purpose: normalize_filter(input.purpose.as_deref()),
        round_trip: input.round_trip,
    };
    let trip = MileageRepo::create(&state.pool, &create).await?;

    tracing::info!(
        trip_id = trip.id,
        miles = trip.miles,
        looked_up = input.miles.is_none(),
        user_id = admin.user_id,
        "Mileage trip recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: trip })))
}

/// PATCH /api/v1/mileage/{id}
///
/// `miles` is stored as given; no lookup or doubling happens on update.
pub async fn update_mileage(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateMileageTrip>,
) -> AppResult<impl IntoResponse> {
    if let Some(miles) = input.miles {
        validate_non_negative("miles", miles)?;
    }
    trim_if_present("start_location", &mut input.start_location)?;
    trim_if_present("end_location", &mut input.end_location)?;

    let trip = MileageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("MileageTrip", id))?;

    tracing::info!(trip_id = id, user_id = admin.user_id, "Mileage trip updated");
    Ok(Json(DataResponse { data: trip }))
}

/// DELETE /api/v1/mileage/{id}
pub async fn delete_mileage(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MileageRepo::delete(&state.pool, id).await? {
        return Err(not_found("MileageTrip", id));
    }
    tracing::info!(trip_id = id, user_id = admin.user_id, "Mileage trip deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/mileage/distance?origin=&destination=
pub async fn lookup_distance(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<DistanceParams>,
) -> AppResult<impl IntoResponse> {
    let origin = params.origin.trim().to_string();
    let destination = params.destination.trim().to_string();
    require_non_empty("origin", &origin)?;
    require_non_empty("destination", &destination)?;

    let miles = lookup_miles(&state, &origin, &destination).await?;
    Ok(Json(DataResponse {
        data: DistanceResponse {
            origin,
            destination,
            miles,
        },
    }))
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// GET /api/v1/finance/summary?year=
pub async fn finance_summary(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<YearParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(year) = params.year {
        validate_year(year)?;
    }
    let totals = FinanceRepo::totals(&state.pool, params.year).await?;
    let summary = FinanceSummary::compute(
        params.year,
        totals.income_total,
        totals.expenses_by_category,
        totals.total_miles,
        state.config.mileage_rate,
    );
    Ok(Json(DataResponse { data: summary }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn period_rejects_bad_month() {
        let filter = PeriodFilter {
            month: Some(13),
            ..Default::default()
        };
        assert_matches!(normalize_period(filter), Err(CoreError::Validation(_)));
    }

    #[test]
    fn period_drops_blank_category() {
        let filter = PeriodFilter {
            year: Some(2025),
            month: Some(3),
            category: Some("  ".into()),
        };
        let normalized = normalize_period(filter).unwrap();
        assert_eq!(normalized.year, Some(2025));
        assert_eq!(normalized.category, None);
    }
}
