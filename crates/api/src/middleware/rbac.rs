//! Authorization extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests that do not meet
//! the requirement. Use these in route handlers to enforce authorization at
//! the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use venue_core::error::CoreError;
use venue_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a user that exists and is currently an admin. Rejects with 403
/// Forbidden otherwise.
///
/// The admin flag is re-read from the database so a demoted or deleted user
/// loses access before their token expires.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let stored = UserRepo::find_by_id(&state.pool, user.user_id).await?;
        match stored {
            Some(u) if u.is_admin => Ok(RequireAdmin(user)),
            Some(_) => Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            ))),
            None => Err(AppError::Core(CoreError::Unauthorized(
                "User no longer exists".into(),
            ))),
        }
    }
}

/// Requires any authenticated user.
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for route
/// definitions where "this route requires authentication" should read
/// clearly.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
