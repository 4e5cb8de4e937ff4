use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes mounted at `/reviews`.
///
/// ```text
/// GET    /          -> list_reviews (approved only)
/// POST   /          -> create_review
/// GET    /average   -> average_rating
/// GET    /all       -> list_all_reviews (admin)
/// GET    /{id}      -> get_review
/// PATCH  /{id}      -> update_review (admin)
/// DELETE /{id}      -> delete_review (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route("/average", get(reviews::average_rating))
        .route("/all", get(reviews::list_all_reviews))
        .route(
            "/{id}",
            get(reviews::get_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
}
