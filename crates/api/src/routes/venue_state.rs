//! Route definitions for the small pieces of shared UI state: form
//! visibility flags, the music-break alert, and DJ notes.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{dj_notes, form_state, music_break};
use crate::state::AppState;

/// Form visibility routes mounted at `/form-state`.
///
/// ```text
/// GET  /                      -> list_form_states
/// GET  /{form_name}           -> get_form_state
/// PUT  /{form_name}           -> set_form_state (admin)
/// POST /{form_name}/toggle    -> toggle_form_state (admin)
/// ```
pub fn form_state_router() -> Router<AppState> {
    Router::new()
        .route("/", get(form_state::list_form_states))
        .route(
            "/{form_name}",
            get(form_state::get_form_state).put(form_state::set_form_state),
        )
        .route("/{form_name}/toggle", post(form_state::toggle_form_state))
}

/// Music break routes mounted at `/music-break`.
///
/// ```text
/// GET /   -> get_music_break
/// PUT /   -> set_music_break (admin)
/// ```
pub fn music_break_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(music_break::get_music_break).put(music_break::set_music_break),
    )
}

/// DJ note routes mounted at `/dj-notes` (all admin).
///
/// ```text
/// GET    /       -> list_notes (?include_complete=)
/// POST   /       -> create_note
/// PATCH  /{id}   -> update_note
/// DELETE /{id}   -> delete_note
/// ```
pub fn dj_notes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dj_notes::list_notes).post(dj_notes::create_note))
        .route(
            "/{id}",
            patch(dj_notes::update_note).delete(dj_notes::delete_note),
        )
}
