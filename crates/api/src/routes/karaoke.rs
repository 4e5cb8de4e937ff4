//! Route definitions for the karaoke queue and its PIN settings.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{karaoke, karaoke_settings};
use crate::state::AppState;

/// Karaoke queue routes mounted at `/karaoke`.
///
/// ```text
/// GET    /                -> list_queue
/// POST   /                -> create_signup (form visibility + PIN gated)
/// DELETE /                -> clear_queue (admin)
/// GET    /deleted         -> list_deleted (admin)
/// POST   /sort-by-time    -> sort_by_time (admin)
/// PATCH  /{id}            -> update_signup (admin)
/// DELETE /{id}            -> delete_signup (admin, soft)
/// POST   /{id}/move       -> move_signup (admin)
/// POST   /{id}/restore    -> restore_signup (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(karaoke::list_queue)
                .post(karaoke::create_signup)
                .delete(karaoke::clear_queue),
        )
        .route("/deleted", get(karaoke::list_deleted))
        .route("/sort-by-time", post(karaoke::sort_by_time))
        .route(
            "/{id}",
            patch(karaoke::update_signup).delete(karaoke::delete_signup),
        )
        .route("/{id}/move", post(karaoke::move_signup))
        .route("/{id}/restore", post(karaoke::restore_signup))
}

/// PIN settings routes mounted at `/karaoke-settings`.
///
/// ```text
/// GET  /             -> get_settings
/// PUT  /             -> update_settings (admin)
/// POST /verify-pin   -> verify_pin
/// ```
pub fn settings_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(karaoke_settings::get_settings).put(karaoke_settings::update_settings),
        )
        .route("/verify-pin", post(karaoke_settings::verify_pin))
}
