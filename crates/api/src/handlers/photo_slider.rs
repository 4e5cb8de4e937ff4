//! Handlers for the home page photo slider.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::ordering::validate_permutation;
use venue_core::types::DbId;
use venue_core::validation::{require_non_empty, trim_if_present};
use venue_db::models::photo_slider::{CreateSliderImage, ReorderSlider, UpdateSliderImage};
use venue_db::repositories::PhotoSliderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SliderImage",
        id,
    })
}

/// GET /api/v1/photo-slider
pub async fn list_active_slides(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let images = PhotoSliderRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: images }))
}

/// GET /api/v1/photo-slider/all
pub async fn list_all_slides(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let images = PhotoSliderRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/v1/photo-slider
///
/// The image is appended after the current last slide.
pub async fn create_slide(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateSliderImage>,
) -> AppResult<impl IntoResponse> {
    input.image_url = input.image_url.trim().to_string();
    require_non_empty("image_url", &input.image_url)?;

    let image = PhotoSliderRepo::create(&state.pool, &input).await?;

    tracing::info!(
        image_id = image.id,
        sort_order = image.sort_order,
        user_id = admin.user_id,
        "Slider image created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// PATCH /api/v1/photo-slider/{id}
pub async fn update_slide(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateSliderImage>,
) -> AppResult<impl IntoResponse> {
    trim_if_present("image_url", &mut input.image_url)?;
    let image = PhotoSliderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(image_id = id, user_id = admin.user_id, "Slider image updated");
    Ok(Json(DataResponse { data: image }))
}

/// PUT /api/v1/photo-slider/order
///
/// `ids` must list every slide exactly once.
pub async fn reorder_slides(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ReorderSlider>,
) -> AppResult<impl IntoResponse> {
    let current = PhotoSliderRepo::ids(&state.pool).await?;
    validate_permutation(&current, &input.ids)?;

    PhotoSliderRepo::reorder(&state.pool, &input.ids).await?;
    let images = PhotoSliderRepo::list_all(&state.pool).await?;

    tracing::info!(count = input.ids.len(), user_id = admin.user_id, "Slider reordered");
    Ok(Json(DataResponse { data: images }))
}

/// DELETE /api/v1/photo-slider/{id}
pub async fn delete_slide(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PhotoSliderRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(image_id = id, user_id = admin.user_id, "Slider image deleted");
    Ok(StatusCode::NO_CONTENT)
}
