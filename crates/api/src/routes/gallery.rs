use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Gallery routes mounted at `/gallery`.
///
/// ```text
/// GET    /       -> list_gallery (?category=&photo_type=)
/// POST   /       -> create_gallery_image (admin)
/// GET    /{id}   -> get_gallery_image
/// PATCH  /{id}   -> update_gallery_image (admin)
/// DELETE /{id}   -> delete_gallery_image (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(gallery::list_gallery).post(gallery::create_gallery_image),
        )
        .route(
            "/{id}",
            get(gallery::get_gallery_image)
                .patch(gallery::update_gallery_image)
                .delete(gallery::delete_gallery_image),
        )
}
