//! Route definitions for bookkeeping (all admin).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::finance;
use crate::state::AppState;

/// Expense routes mounted at `/expenses`.
///
/// ```text
/// GET    /       -> list_expenses (?year=&month=&category=)
/// POST   /       -> create_expense
/// PATCH  /{id}   -> update_expense
/// DELETE /{id}   -> delete_expense
/// ```
pub fn expenses_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(finance::list_expenses).post(finance::create_expense),
        )
        .route(
            "/{id}",
            patch(finance::update_expense).delete(finance::delete_expense),
        )
}

/// Income routes mounted at `/income`.
///
/// ```text
/// GET    /       -> list_income (?year=&month=)
/// POST   /       -> create_income
/// PATCH  /{id}   -> update_income
/// DELETE /{id}   -> delete_income
/// ```
pub fn income_router() -> Router<AppState> {
    Router::new()
        .route("/", get(finance::list_income).post(finance::create_income))
        .route(
            "/{id}",
            patch(finance::update_income).delete(finance::delete_income),
        )
}

/// Mileage routes mounted at `/mileage`.
///
/// ```text
/// GET    /           -> list_mileage (?year=&month=)
/// POST   /           -> create_mileage (distance looked up when miles absent)
/// GET    /distance   -> lookup_distance (?origin=&destination=)
/// PATCH  /{id}       -> update_mileage
/// DELETE /{id}       -> delete_mileage
/// ```
pub fn mileage_router() -> Router<AppState> {
    Router::new()
        .route("/", get(finance::list_mileage).post(finance::create_mileage))
        .route("/distance", get(finance::lookup_distance))
        .route(
            "/{id}",
            patch(finance::update_mileage).delete(finance::delete_mileage),
        )
}

/// Summary routes mounted at `/finance`.
///
/// ```text
/// GET /summary   -> finance_summary (?year=)
/// ```
pub fn summary_router() -> Router<AppState> {
    Router::new().route("/summary", get(finance::finance_summary))
}
