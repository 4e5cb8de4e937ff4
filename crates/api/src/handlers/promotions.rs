//! Handlers for the `/promotions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::promotion::validate_window;
use venue_core::types::DbId;
use venue_core::validation::{require_non_empty, trim_if_present};
use venue_db::models::promotion::{CreatePromotion, UpdatePromotion};
use venue_db::repositories::PromotionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Promotion",
        id,
    })
}

/// GET /api/v1/promotions
///
/// Active promotions whose date window contains today (UTC).
pub async fn list_running(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let promotions = PromotionRepo::list_running(&state.pool, today).await?;
    Ok(Json(DataResponse { data: promotions }))
}

/// GET /api/v1/promotions/all
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let promotions = PromotionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: promotions }))
}

/// POST /api/v1/promotions
pub async fn create_promotion(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreatePromotion>,
) -> AppResult<impl IntoResponse> {
    input.title = input.title.trim().to_string();
    require_non_empty("title", &input.title)?;
    validate_window(input.start_date, input.end_date)?;

    let promotion = PromotionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        promotion_id = promotion.id,
        title = %promotion.title,
        user_id = admin.user_id,
        "Promotion created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: promotion })))
}

/// PATCH /api/v1/promotions/{id}
///
/// The window is checked against the merged (stored + patched) dates.
pub async fn update_promotion(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePromotion>,
) -> AppResult<impl IntoResponse> {
    trim_if_present("title", &mut input.title)?;
    let existing = PromotionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_window(
        input.start_date.or(existing.start_date),
        input.end_date.or(existing.end_date),
    )?;

    let promotion = PromotionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(promotion_id = id, user_id = admin.user_id, "Promotion updated");
    Ok(Json(DataResponse { data: promotion }))
}

/// DELETE /api/v1/promotions/{id}
pub async fn delete_promotion(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PromotionRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(promotion_id = id, user_id = admin.user_id, "Promotion deleted");
    Ok(StatusCode::NO_CONTENT)
}
