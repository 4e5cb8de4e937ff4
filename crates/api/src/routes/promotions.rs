use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::promotions;
use crate::state::AppState;

/// Promotion routes mounted at `/promotions`.
///
/// ```text
/// GET    /       -> list_running (active and in date window)
/// POST   /       -> create_promotion (admin)
/// GET    /all    -> list_all (admin)
/// PATCH  /{id}   -> update_promotion (admin)
/// DELETE /{id}   -> delete_promotion (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(promotions::list_running).post(promotions::create_promotion),
        )
        .route("/all", get(promotions::list_all))
        .route(
            "/{id}",
            patch(promotions::update_promotion).delete(promotions::delete_promotion),
        )
}
