use axum::routing::{get, post};
use axum::Router;

use crate::handlers::instagram;
use crate::state::AppState;

/// Instagram feed routes mounted at `/instagram-posts`.
///
/// ```text
/// GET  /          -> list_posts (?limit=)
/// POST /refresh   -> refresh_posts (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(instagram::list_posts))
        .route("/refresh", post(instagram::refresh_posts))
}
