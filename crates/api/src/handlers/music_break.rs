//! Handlers for the music-break alert shown on the karaoke screens.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use venue_core::validation::normalize_filter;
use venue_db::models::music_break::SetMusicBreak;
use venue_db::repositories::MusicBreakRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/music-break
pub async fn get_music_break(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let music_break = MusicBreakRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: music_break }))
}

/// PUT /api/v1/music-break
///
/// `started_at` is stamped when a break starts and cleared when it ends.
pub async fn set_music_break(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SetMusicBreak>,
) -> AppResult<impl IntoResponse> {
    let message = normalize_filter(input.message.as_deref());
    let music_break =
        MusicBreakRepo::set(&state.pool, input.is_active, message.as_deref()).await?;

    tracing::info!(
        is_active = music_break.is_active,
        user_id = admin.user_id,
        "Music break updated",
    );

    Ok(Json(DataResponse { data: music_break }))
}
