use axum::routing::get;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Contact routes mounted at `/contacts`.
///
/// ```text
/// GET    /       -> list_contacts (admin)
/// POST   /       -> create_contact
/// GET    /{id}   -> get_contact (admin)
/// PATCH  /{id}   -> update_contact (admin)
/// DELETE /{id}   -> delete_contact (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/{id}",
            get(contacts::get_contact)
                .patch(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
}
