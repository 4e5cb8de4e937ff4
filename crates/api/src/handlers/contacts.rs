//! Handlers for the `/contacts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::booking::{validate_status, STATUS_PENDING};
use venue_core::error::CoreError;
use venue_core::types::DbId;
use venue_core::validation::{require_non_empty, validate_email};
use venue_db::models::booking::BookingTable;
use venue_db::models::contact::{ContactRequest, CreateContact, StatusPriceRequest};
use venue_db::repositories::{BookingRepo, ContactRepo};

use super::booking_input::{parse_phone, parse_price, status_price_update};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Contact",
        id,
    })
}

/// POST /api/v1/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("firstName", &input.first_name)?;
    let email = input.email.trim().to_string();
    validate_email(&email)?;

    let status = input.status.unwrap_or_else(|| STATUS_PENDING.to_string());
    validate_status(&status)?;

    let create = CreateContact {
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        phone: parse_phone(input.phone.as_deref())?,
        email,
        message: input.message,
        status,
        price: parse_price(input.price.as_ref())?,
    };
    let contact = ContactRepo::create(&state.pool, &create).await?;

    tracing::info!(contact_id = contact.id, "Contact created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: contact })))
}

/// GET /api/v1/contacts
pub async fn list_contacts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// GET /api/v1/contacts/{id}
pub async fn get_contact(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: contact }))
}

/// PATCH /api/v1/contacts/{id}
///
/// Update status and/or price.
pub async fn update_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusPriceRequest>,
) -> AppResult<impl IntoResponse> {
    let update = status_price_update(&input)?;
    if !BookingRepo::update_status_price(&state.pool, BookingTable::Contacts, id, &update).await? {
        return Err(not_found(id));
    }
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        contact_id = id,
        status = %contact.status,
        user_id = admin.user_id,
        "Contact updated",
    );

    Ok(Json(DataResponse { data: contact }))
}

/// DELETE /api/v1/contacts/{id}
///
/// Contacts still linked to bookings or inquiries cannot be deleted.
pub async fn delete_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContactRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    if ContactRepo::is_referenced(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Contact {id} is referenced by bookings or inquiries"
        ))));
    }

    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(contact_id = id, user_id = admin.user_id, "Contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
