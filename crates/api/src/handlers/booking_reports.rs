//! Cross-table booking views: listings by status, search and earnings.
//!
//! Every report covers contacts plus the three booking tables.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use venue_core::booking::{EarningsTotals, BOOKED_STATUSES, EARNING_STATUSES, PAID_STATUSES};
use venue_core::finance::validate_year;
use venue_core::validation::normalize_filter;
use venue_db::models::booking::BookingSearch;
use venue_db::repositories::BookingReportRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::YearParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /bookings/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

impl SearchParams {
    fn normalized(&self) -> BookingSearch {
        BookingSearch {
            name: normalize_filter(self.name.as_deref()),
            phone: normalize_filter(self.phone.as_deref()),
            status: normalize_filter(self.status.as_deref()),
        }
    }
}

/// GET /api/v1/bookings/all
pub async fn all_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingReportRepo::all(&state.pool).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/booked
pub async fn booked_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingReportRepo::with_statuses(&state.pool, BOOKED_STATUSES).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/search?name=&phone=&status=
pub async fn search_bookings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = params.normalized();
    let bookings = BookingReportRepo::search(&state.pool, &search).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/bookings/monthly-earnings?year=
pub async fn monthly_earnings(
    State(state): State<AppState>,
    Query(params): Query<YearParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(year) = params.year {
        validate_year(year)?;
    }
    let earnings =
        BookingReportRepo::monthly_earnings(&state.pool, EARNING_STATUSES, params.year).await?;
    Ok(Json(DataResponse { data: earnings }))
}

/// GET /api/v1/bookings/total-earnings
pub async fn total_earnings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let totals = earnings_for(&state, EARNING_STATUSES).await?;
    Ok(Json(DataResponse { data: totals }))
}

/// GET /api/v1/bookings/potential-earnings
pub async fn potential_earnings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let totals = earnings_for(&state, PAID_STATUSES).await?;
    Ok(Json(DataResponse { data: totals }))
}

async fn earnings_for(state: &AppState, statuses: &[&str]) -> AppResult<EarningsTotals> {
    let [contact, engineering, performance, karaoke] =
        BookingReportRepo::totals(&state.pool, statuses).await?;
    Ok(EarningsTotals::from_sums(
        contact,
        engineering,
        performance,
        karaoke,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_filters_are_dropped() {
        let params = SearchParams {
            name: Some("  ".into()),
            phone: None,
            status: Some(" booked ".into()),
        };
        let search = params.normalized();
        assert_eq!(search.name, None);
        assert_eq!(search.phone, None);
        assert_eq!(search.status.as_deref(), Some("booked"));
    }
}
