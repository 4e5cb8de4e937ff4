//! Handlers for DJ notes (reminders with an optional alert time).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::error::CoreError;
use venue_core::types::DbId;
use venue_core::validation::{require_non_empty, trim_if_present};
use venue_db::models::dj_note::{CreateDjNote, UpdateDjNote};
use venue_db::repositories::DjNoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeCompleteParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "DjNote",
        id,
    })
}

/// GET /api/v1/dj-notes?include_complete=
pub async fn list_notes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<IncludeCompleteParams>,
) -> AppResult<impl IntoResponse> {
    let notes = DjNoteRepo::list(&state.pool, params.include_complete).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /api/v1/dj-notes
pub async fn create_note(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateDjNote>,
) -> AppResult<impl IntoResponse> {
    input.content = input.content.trim().to_string();
    require_non_empty("content", &input.content)?;

    let note = DjNoteRepo::create(&state.pool, &input).await?;
    tracing::info!(note_id = note.id, user_id = admin.user_id, "DJ note created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// PATCH /api/v1/dj-notes/{id}
pub async fn update_note(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateDjNote>,
) -> AppResult<impl IntoResponse> {
    trim_if_present("content", &mut input.content)?;
    let note = DjNoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        note_id = id,
        is_complete = note.is_complete,
        user_id = admin.user_id,
        "DJ note updated",
    );
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/dj-notes/{id}
pub async fn delete_note(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !DjNoteRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(note_id = id, user_id = admin.user_id, "DJ note deleted");
    Ok(StatusCode::NO_CONTENT)
}
