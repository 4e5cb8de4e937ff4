//! Handlers for the `/inquiries` resource (general questions from the
//! public contact form).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::booking::validate_inquiry_status;
use venue_core::error::CoreError;
use venue_core::types::DbId;
use venue_db::models::inquiry::{CreateInquiry, InquiryRequest, UpdateInquiry};
use venue_db::repositories::InquiryRepo;

use super::booking_input::{client_details, require_all};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Inquiry",
        id,
    })
}

/// POST /api/v1/inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(input): Json<InquiryRequest>,
) -> AppResult<impl IntoResponse> {
    let client = client_details(&input.name, &input.email, input.phone.as_deref())?;
    require_all(&[("subject", &input.subject), ("message", &input.message)])?;

    let create = CreateInquiry {
        subject: input.subject.trim().to_string(),
        message: input.message.trim().to_string(),
    };
    let inquiry = InquiryRepo::create(&state.pool, &client, &create).await?;

    tracing::info!(
        inquiry_id = inquiry.id,
        contact_id = inquiry.contact_id,
        "Inquiry created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: inquiry })))
}

/// GET /api/v1/inquiries
pub async fn list_inquiries(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let inquiries = InquiryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: inquiries }))
}

/// PATCH /api/v1/inquiries/{id}
pub async fn update_inquiry(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInquiry>,
) -> AppResult<impl IntoResponse> {
    validate_inquiry_status(&input.status)?;
    let inquiry = InquiryRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        inquiry_id = id,
        status = %inquiry.status,
        user_id = admin.user_id,
        "Inquiry updated",
    );

    Ok(Json(DataResponse { data: inquiry }))
}

/// DELETE /api/v1/inquiries/{id}
pub async fn delete_inquiry(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !InquiryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(inquiry_id = id, user_id = admin.user_id, "Inquiry deleted");
    Ok(StatusCode::NO_CONTENT)
}
