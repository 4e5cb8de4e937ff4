use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::photo_slider;
use crate::state::AppState;

/// Photo slider routes mounted at `/photo-slider`.
///
/// ```text
/// GET    /        -> list_active_slides
/// POST   /        -> create_slide (admin)
/// GET    /all     -> list_all_slides (admin)
/// PUT    /order   -> reorder_slides (admin)
/// PATCH  /{id}    -> update_slide (admin)
/// DELETE /{id}    -> delete_slide (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(photo_slider::list_active_slides).post(photo_slider::create_slide),
        )
        .route("/all", get(photo_slider::list_all_slides))
        .route("/order", put(photo_slider::reorder_slides))
        .route(
            "/{id}",
            patch(photo_slider::update_slide).delete(photo_slider::delete_slide),
        )
}
