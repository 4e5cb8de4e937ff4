//! Handlers for named form visibility flags.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use venue_core::forms::{validate_form_name, DEFAULT_VISIBILITY};
use venue_db::models::form_state::{FormState, SetFormState};
use venue_db::repositories::FormStateRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/form-state
pub async fn list_form_states(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let forms = FormStateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// GET /api/v1/form-state/{form_name}
///
/// Forms that were never configured report the default visibility.
pub async fn get_form_state(
    State(state): State<AppState>,
    Path(form_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_form_name(&form_name)?;
    let form = FormStateRepo::find(&state.pool, &form_name)
        .await?
        .unwrap_or(FormState {
            form_name,
            is_visible: DEFAULT_VISIBILITY,
            updated_at: None,
        });
    Ok(Json(DataResponse { data: form }))
}

/// PUT /api/v1/form-state/{form_name}
pub async fn set_form_state(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(form_name): Path<String>,
    Json(input): Json<SetFormState>,
) -> AppResult<impl IntoResponse> {
    validate_form_name(&form_name)?;
    let form = FormStateRepo::upsert(&state.pool, &form_name, input.is_visible).await?;

    tracing::info!(
        form_name = %form.form_name,
        is_visible = form.is_visible,
        user_id = admin.user_id,
        "Form visibility set",
    );

    Ok(Json(DataResponse { data: form }))
}

/// POST /api/v1/form-state/{form_name}/toggle
pub async fn toggle_form_state(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(form_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_form_name(&form_name)?;
    let form = FormStateRepo::toggle(&state.pool, &form_name, DEFAULT_VISIBILITY).await?;

    tracing::info!(
        form_name = %form.form_name,
        is_visible = form.is_visible,
        user_id = admin.user_id,
        "Form visibility toggled",
    );

    Ok(Json(DataResponse { data: form }))
}
