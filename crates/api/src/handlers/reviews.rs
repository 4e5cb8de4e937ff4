//! Handlers for the `/reviews` resource.
//!
//! Public visitors submit reviews and read the approved ones. Admins see
//! everything and approve or remove reviews.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use venue_core::booking::round_cents;
use venue_core::error::CoreError;
use venue_core::review::{
    validate_rating, validate_review_text, INVALID_RATING_MESSAGE, MISSING_FIELDS_MESSAGE,
};
use venue_core::types::DbId;
use venue_core::validation::{normalize_filter, parse_loose_number};
use venue_db::models::review::{CreateReview, ReviewRequest, UpdateReview};
use venue_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ServiceFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Average rating payload.
#[derive(Debug, Serialize)]
pub struct AverageRating {
    pub average_rating: f64,
}

/// Turn the loosely typed public payload into a validated insert DTO.
fn parse_review(input: ReviewRequest) -> Result<CreateReview, CoreError> {
    let missing = || CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string());

    let name = normalize_filter(input.name.as_deref()).ok_or_else(missing)?;
    let service = normalize_filter(input.service.as_deref()).ok_or_else(missing)?;
    let description = normalize_filter(input.description.as_deref()).ok_or_else(missing)?;
    let rating =
        parse_loose_number(input.rating.as_ref(), INVALID_RATING_MESSAGE)?.ok_or_else(missing)?;

    validate_rating(rating)?;
    validate_review_text(&name, &service, &description)?;

    Ok(CreateReview {
        name,
        rating,
        service,
        image_url: normalize_filter(input.image_url.as_deref()),
        website_url: normalize_filter(input.website_url.as_deref()),
        description,
    })
}

/// POST /api/v1/reviews
///
/// Submit a review. It stays hidden until an admin approves it.
pub async fn create_review(
    State(state): State<AppState>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let create = parse_review(input)?;
    let review = ReviewRepo::create(&state.pool, &create).await?;

    tracing::info!(
        review_id = review.id,
        service = %review.service,
        rating = review.rating,
        "Review submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// GET /api/v1/reviews?service=
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ServiceFilter>,
) -> AppResult<impl IntoResponse> {
    let service = normalize_filter(params.service.as_deref());
    let reviews = ReviewRepo::list_approved(&state.pool, service.as_deref()).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// GET /api/v1/reviews/{id}
///
/// Pending reviews are reported as missing.
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|r| r.is_approved)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;
    Ok(Json(DataResponse { data: review }))
}

/// GET /api/v1/reviews/average
pub async fn average_rating(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let avg = ReviewRepo::average_rating(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No reviews found".into()))?;
    Ok(Json(DataResponse {
        data: AverageRating {
            average_rating: round_cents(avg),
        },
    }))
}

/// GET /api/v1/reviews/all
pub async fn list_all_reviews(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// PATCH /api/v1/reviews/{id}
pub async fn update_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;

    tracing::info!(
        review_id = id,
        is_approved = review.is_approved,
        user_id = admin.user_id,
        "Review moderated",
    );

    Ok(Json(DataResponse { data: review }))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ReviewRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }));
    }

    tracing::info!(review_id = id, user_id = admin.user_id, "Review deleted");
    Ok(StatusCode::NO_CONTENT)
}
