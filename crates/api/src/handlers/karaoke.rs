//! Handlers for the karaoke signup queue.
//!
//! Active entries keep dense positions `1..=n`. Deleting is soft: entries
//! move to a "deleted" list and can be restored at the end of the queue.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::forms::{DEFAULT_VISIBILITY, FORM_KARAOKE};
use venue_core::karaoke::{validate_signup_fields, QueueMove, MAX_FIELD_LENGTH};
use venue_core::types::DbId;
use venue_core::validation::{normalize_filter, trim_if_present, validate_max_length};
use venue_db::models::karaoke::{CreateKaraokeSignup, KaraokeSignupRequest, UpdateKaraokeSignup};
use venue_db::repositories::{FormStateRepo, KaraokeRepo, KaraokeSettingsRepo};

use super::karaoke_settings::pin_unlocks;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{AffectedResponse, DataResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "KaraokeSignup",
        id,
    })
}

/// POST /api/v1/karaoke
///
/// Join the queue. Refused while the karaoke form is hidden or when PIN
/// gating is on and the PIN does not match.
pub async fn create_signup(
    State(state): State<AppState>,
    Json(input): Json<KaraokeSignupRequest>,
) -> AppResult<impl IntoResponse> {
    let visible = FormStateRepo::find(&state.pool, FORM_KARAOKE)
        .await?
        .map_or(DEFAULT_VISIBILITY, |f| f.is_visible);
    if !visible {
        return Err(AppError::Core(CoreError::Forbidden(
            "Karaoke signups are closed".into(),
        )));
    }

    let settings = KaraokeSettingsRepo::get(&state.pool).await?;
    if !pin_unlocks(&settings, input.pin.as_deref())? {
        return Err(AppError::Core(CoreError::Forbidden("Invalid PIN".into())));
    }

    let singer_name = input.singer_name.trim().to_string();
    let song_title = input.song_title.trim().to_string();
    validate_signup_fields(&singer_name, &song_title)?;
    let artist = normalize_filter(input.artist.as_deref());
    if let Some(artist) = &artist {
        validate_max_length("artist", artist, MAX_FIELD_LENGTH)?;
    }

    let create = CreateKaraokeSignup {
        singer_name,
        song_title,
        artist,
        notes: normalize_filter(input.notes.as_deref()),
    };
    let signup = KaraokeRepo::create(&state.pool, &create).await?;

    tracing::info!(
        signup_id = signup.id,
        position = signup.position,
        "Karaoke signup added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: signup })))
}

/// GET /api/v1/karaoke
pub async fn list_queue(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let queue = KaraokeRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: queue }))
}

/// GET /api/v1/karaoke/deleted
pub async fn list_deleted(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let deleted = KaraokeRepo::list_deleted(&state.pool).await?;
    Ok(Json(DataResponse { data: deleted }))
}

/// PATCH /api/v1/karaoke/{id}
pub async fn update_signup(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateKaraokeSignup>,
) -> AppResult<impl IntoResponse> {
    for (field, value) in [
        ("singer_name", &mut input.singer_name),
        ("song_title", &mut input.song_title),
    ] {
        trim_if_present(field, value)?;
        if let Some(value) = value {
            validate_max_length(field, value, MAX_FIELD_LENGTH)?;
        }
    }

    let signup = KaraokeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(signup_id = id, user_id = admin.user_id, "Karaoke signup updated");
    Ok(Json(DataResponse { data: signup }))
}

/// POST /api/v1/karaoke/{id}/move
///
/// Body is `{"direction": "up"|"down"}` or `{"position": n}`. Returns the
/// re-sequenced queue.
pub async fn move_signup(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(movement): Json<QueueMove>,
) -> AppResult<impl IntoResponse> {
    let queue = KaraokeRepo::move_entry(&state.pool, id, movement)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        signup_id = id,
        movement = ?movement,
        user_id = admin.user_id,
        "Karaoke signup moved",
    );

    Ok(Json(DataResponse { data: queue }))
}

/// POST /api/v1/karaoke/sort-by-time
pub async fn sort_by_time(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let queue = KaraokeRepo::sort_by_time(&state.pool).await?;
    tracing::info!(count = queue.len(), user_id = admin.user_id, "Karaoke queue sorted by time");
    Ok(Json(DataResponse { data: queue }))
}

/// DELETE /api/v1/karaoke/{id}
pub async fn delete_signup(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !KaraokeRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(signup_id = id, user_id = admin.user_id, "Karaoke signup deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/karaoke/{id}/restore
pub async fn restore_signup(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let signup = KaraokeRepo::restore(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        signup_id = id,
        position = signup.position,
        user_id = admin.user_id,
        "Karaoke signup restored",
    );

    Ok(Json(DataResponse { data: signup }))
}

/// DELETE /api/v1/karaoke
///
/// Soft-delete the whole active queue.
pub async fn clear_queue(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let affected = KaraokeRepo::clear(&state.pool).await?;
    tracing::info!(affected, user_id = admin.user_id, "Karaoke queue cleared");
    Ok(Json(DataResponse {
        data: AffectedResponse { affected },
    }))
}
