//! Handlers for the `/gallery` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::types::DbId;
use venue_core::validation::{
    normalize_filter, require_non_empty, trim_if_present, validate_max_length,
};
use venue_db::models::gallery::{CreateGalleryImage, GalleryFilter, UpdateGalleryImage};
use venue_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum length of the `photo_type` label.
pub const MAX_PHOTO_TYPE_LENGTH: usize = 20;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GalleryImage",
        id,
    })
}

fn validate_photo_type(photo_type: &str) -> Result<(), CoreError> {
    require_non_empty("photo_type", photo_type)?;
    validate_max_length("photo_type", photo_type, MAX_PHOTO_TYPE_LENGTH)
}

/// GET /api/v1/gallery?category=&photo_type=
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryFilter>,
) -> AppResult<impl IntoResponse> {
    let filter = GalleryFilter {
        category: normalize_filter(params.category.as_deref()),
        photo_type: normalize_filter(params.photo_type.as_deref()),
    };
    let images = GalleryRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: images }))
}

/// GET /api/v1/gallery/{id}
pub async fn get_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: image }))
}

/// POST /api/v1/gallery
pub async fn create_gallery_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateGalleryImage>,
) -> AppResult<impl IntoResponse> {
    input.image_url = input.image_url.trim().to_string();
    input.photo_type = input.photo_type.trim().to_string();
    require_non_empty("image_url", &input.image_url)?;
    validate_photo_type(&input.photo_type)?;
    input.category = normalize_filter(input.category.as_deref());

    let image = GalleryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        image_id = image.id,
        photo_type = %image.photo_type,
        user_id = admin.user_id,
        "Gallery image created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// PATCH /api/v1/gallery/{id}
pub async fn update_gallery_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateGalleryImage>,
) -> AppResult<impl IntoResponse> {
    trim_if_present("image_url", &mut input.image_url)?;
    trim_if_present("photo_type", &mut input.photo_type)?;
    if let Some(photo_type) = &input.photo_type {
        validate_photo_type(photo_type)?;
    }

    let image = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(image_id = id, user_id = admin.user_id, "Gallery image updated");
    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete_gallery_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(image_id = id, user_id = admin.user_id, "Gallery image deleted");
    Ok(StatusCode::NO_CONTENT)
}
