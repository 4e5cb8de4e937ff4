use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Inquiry routes mounted at `/inquiries`.
///
/// ```text
/// GET    /       -> list_inquiries (admin)
/// POST   /       -> create_inquiry
/// PATCH  /{id}   -> update_inquiry (admin)
/// DELETE /{id}   -> delete_inquiry (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(inquiries::list_inquiries).post(inquiries::create_inquiry),
        )
        .route(
            "/{id}",
            patch(inquiries::update_inquiry).delete(inquiries::delete_inquiry),
        )
}
