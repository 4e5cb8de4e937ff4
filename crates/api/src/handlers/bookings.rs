//! Handlers for the three booking kinds: engineering, performance and
//! karaoke hosting.
//!
//! Each booking is linked to a contact found by the client's email (or
//! created from the client fields). New bookings always start as `Pending`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::types::DbId;
use venue_core::validation::normalize_filter;
use venue_db::models::booking::BookingTable;
use venue_db::models::contact::StatusPriceRequest;
use venue_db::models::engineering_booking::{CreateEngineeringBooking, EngineeringBookingRequest};
use venue_db::models::karaoke_hosting::{CreateKaraokeHostingBooking, KaraokeHostingRequest};
use venue_db::models::performance_booking::{CreatePerformanceBooking, PerformanceBookingRequest};
use venue_db::repositories::{
    BookingRepo, EngineeringBookingRepo, KaraokeHostingRepo, PerformanceBookingRepo,
};

use super::booking_input::{client_details, parse_price, require_all, status_price_update};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Patch status/price on any booking table, then reload via `reload`.
async fn patch_booking<T, F, Fut>(
    state: &AppState,
    table: BookingTable,
    entity: &'static str,
    id: DbId,
    input: &StatusPriceRequest,
    reload: F,
) -> AppResult<T>
where
    F: FnOnce(venue_db::DbPool, DbId) -> Fut,
    Fut: std::future::Future<Output = Result<Option<T>, sqlx::Error>>,
{
    let update = status_price_update(input)?;
    if !BookingRepo::update_status_price(&state.pool, table, id, &update).await? {
        return Err(not_found(entity, id));
    }
    reload(state.pool.clone(), id)
        .await?
        .ok_or_else(|| not_found(entity, id))
}

async fn remove_booking(
    state: &AppState,
    table: BookingTable,
    entity: &'static str,
    id: DbId,
) -> AppResult<()> {
    if !BookingRepo::delete(&state.pool, table, id).await? {
        return Err(not_found(entity, id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Engineering bookings
// ---------------------------------------------------------------------------

/// POST /api/v1/engineering-bookings
pub async fn create_engineering_booking(
    State(state): State<AppState>,
    Json(input): Json<EngineeringBookingRequest>,
) -> AppResult<impl IntoResponse> {
    let client = client_details(
        &input.client_name,
        &input.client_email,
        input.client_phone.as_deref(),
    )?;
    require_all(&[
        ("projectName", &input.project_name),
        ("projectType", &input.project_type),
        ("projectStartDate", &input.project_start_date),
        ("projectEndDate", &input.project_end_date),
    ])?;

    let create = CreateEngineeringBooking {
        project_name: input.project_name.trim().to_string(),
        project_manager: normalize_filter(input.project_manager.as_deref()),
        project_type: input.project_type.trim().to_string(),
        project_start_date: input.project_start_date.trim().to_string(),
        project_end_date: input.project_end_date.trim().to_string(),
        project_description: normalize_filter(input.project_description.as_deref()),
        special_requests: normalize_filter(input.special_requests.as_deref()),
        price: parse_price(input.price.as_ref())?,
    };
    let booking = EngineeringBookingRepo::create(&state.pool, &client, &create).await?;

    tracing::info!(
        booking_id = booking.id,
        contact_id = booking.contact_id,
        "Engineering booking created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// GET /api/v1/engineering-bookings
pub async fn list_engineering_bookings(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = EngineeringBookingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/engineering-bookings/{id}
pub async fn get_engineering_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = EngineeringBookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("EngineeringBooking", id))?;
    Ok(Json(DataResponse { data: booking }))
}

/// PATCH /api/v1/engineering-bookings/{id}
pub async fn update_engineering_booking(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusPriceRequest>,
) -> AppResult<impl IntoResponse> {
    let booking = patch_booking(
        &state,
        BookingTable::Engineering,
        "EngineeringBooking",
        id,
        &input,
        |pool, id| async move { EngineeringBookingRepo::find_by_id(&pool, id).await },
    )
    .await?;

    tracing::info!(
        booking_id = id,
        status = %booking.status,
        user_id = admin.user_id,
        "Engineering booking updated",
    );

    Ok(Json(DataResponse { data: booking }))
}

/// DELETE /api/v1/engineering-bookings/{id}
pub async fn delete_engineering_booking(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    remove_booking(&state, BookingTable::Engineering, "EngineeringBooking", id).await?;
    tracing::info!(booking_id = id, user_id = admin.user_id, "Engineering booking deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Performance bookings
// ---------------------------------------------------------------------------

/// POST /api/v1/performance-bookings
pub async fn create_performance_booking(
    State(state): State<AppState>,
    Json(input): Json<PerformanceBookingRequest>,
) -> AppResult<impl IntoResponse> {
    let client = client_details(
        &input.client_name,
        &input.client_email,
        input.client_phone.as_deref(),
    )?;
    require_all(&[
        ("eventName", &input.event_name),
        ("eventType", &input.event_type),
        ("eventDateTime", &input.event_date_time),
        ("location", &input.location),
    ])?;

    let create = CreatePerformanceBooking {
        event_name: input.event_name.trim().to_string(),
        event_type: input.event_type.trim().to_string(),
        event_date_time: input.event_date_time.trim().to_string(),
        location: input.location.trim().to_string(),
        guests: normalize_filter(input.guests.as_deref()),
        special_requests: normalize_filter(input.special_requests.as_deref()),
        price: parse_price(input.price.as_ref())?,
    };
    let booking = PerformanceBookingRepo::create(&state.pool, &client, &create).await?;

    tracing::info!(
        booking_id = booking.id,
        contact_id = booking.contact_id,
        "Performance booking created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// GET /api/v1/performance-bookings
pub async fn list_performance_bookings(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = PerformanceBookingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/performance-bookings/{id}
pub async fn get_performance_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = PerformanceBookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("PerformanceBooking", id))?;
    Ok(Json(DataResponse { data: booking }))
}

/// PATCH /api/v1/performance-bookings/{id}
pub async fn update_performance_booking(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusPriceRequest>,
) -> AppResult<impl IntoResponse> {
    let booking = patch_booking(
        &state,
        BookingTable::Performance,
        "PerformanceBooking",
        id,
        &input,
        |pool, id| async move { PerformanceBookingRepo::find_by_id(&pool, id).await },
    )
    .await?;

    tracing::info!(
        booking_id = id,
        status = %booking.status,
        user_id = admin.user_id,
        "Performance booking updated",
    );

    Ok(Json(DataResponse { data: booking }))
}

/// DELETE /api/v1/performance-bookings/{id}
pub async fn delete_performance_booking(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    remove_booking(&state, BookingTable::Performance, "PerformanceBooking", id).await?;
    tracing::info!(booking_id = id, user_id = admin.user_id, "Performance booking deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Karaoke hosting bookings
// ---------------------------------------------------------------------------

/// POST /api/v1/karaoke-hosting
pub async fn create_karaoke_hosting(
    State(state): State<AppState>,
    Json(input): Json<KaraokeHostingRequest>,
) -> AppResult<impl IntoResponse> {
    let client = client_details(
        &input.client_name,
        &input.client_email,
        input.client_phone.as_deref(),
    )?;
    require_all(&[
        ("eventName", &input.event_name),
        ("eventDate", &input.event_date),
        ("startTime", &input.start_time),
        ("location", &input.location),
    ])?;

    let create = CreateKaraokeHostingBooking {
        event_name: input.event_name.trim().to_string(),
        event_date: input.event_date.trim().to_string(),
        start_time: input.start_time.trim().to_string(),
        end_time: normalize_filter(input.end_time.as_deref()),
        location: input.location.trim().to_string(),
        guests: normalize_filter(input.guests.as_deref()),
        special_requests: normalize_filter(input.special_requests.as_deref()),
        price: parse_price(input.price.as_ref())?,
    };
    let booking = KaraokeHostingRepo::create(&state.pool, &client, &create).await?;

    tracing::info!(
        booking_id = booking.id,
        contact_id = booking.contact_id,
        "Karaoke hosting booking created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// GET /api/v1/karaoke-hosting
pub async fn list_karaoke_hosting(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = KaraokeHostingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// GET /api/v1/karaoke-hosting/{id}
pub async fn get_karaoke_hosting(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = KaraokeHostingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("KaraokeHostingBooking", id))?;
    Ok(Json(DataResponse { data: booking }))
}

/// PATCH /api/v1/karaoke-hosting/{id}
pub async fn update_karaoke_hosting(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusPriceRequest>,
) -> AppResult<impl IntoResponse> {
    let booking = patch_booking(
        &state,
        BookingTable::KaraokeHosting,
        "KaraokeHostingBooking",
        id,
        &input,
        |pool, id| async move { KaraokeHostingRepo::find_by_id(&pool, id).await },
    )
    .await?;

    tracing::info!(
        booking_id = id,
        status = %booking.status,
        user_id = admin.user_id,
        "Karaoke hosting booking updated",
    );

    Ok(Json(DataResponse { data: booking }))
}

/// DELETE /api/v1/karaoke-hosting/{id}
pub async fn delete_karaoke_hosting(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    remove_booking(
        &state,
        BookingTable::KaraokeHosting,
        "KaraokeHostingBooking",
        id,
    )
    .await?;
    tracing::info!(booking_id = id, user_id = admin.user_id, "Karaoke hosting booking deleted");
    Ok(StatusCode::NO_CONTENT)
}
