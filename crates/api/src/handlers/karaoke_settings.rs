//! Handlers for karaoke PIN gating.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use venue_core::error::CoreError;
use venue_core::karaoke::validate_pin;
use venue_db::models::karaoke::{KaraokeSettings, UpdateKaraokeSettings, VerifyPin};
use venue_db::repositories::KaraokeSettingsRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of `POST /karaoke-settings/verify-pin`.
#[derive(Debug, Serialize)]
pub struct PinCheck {
    pub valid: bool,
}

/// Whether `pin` unlocks signups under `settings`.
///
/// Always `true` while gating is off. With gating on, a missing PIN or a
/// missing stored hash never matches.
pub(crate) fn pin_unlocks(settings: &KaraokeSettings, pin: Option<&str>) -> AppResult<bool> {
    if !settings.pin_enabled {
        return Ok(true);
    }
    let (Some(pin), Some(hash)) = (pin, settings.pin_hash.as_deref()) else {
        return Ok(false);
    };
    verify_password(pin.trim(), hash)
        .map_err(|e| AppError::InternalError(format!("PIN verification error: {e}")))
}

/// GET /api/v1/karaoke-settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = KaraokeSettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/karaoke-settings
///
/// Enabling gating requires a PIN, either in this request or already stored.
pub async fn update_settings(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateKaraokeSettings>,
) -> AppResult<impl IntoResponse> {
    let pin = input
        .pin
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let pin_hash = match pin {
        Some(pin) => {
            validate_pin(pin)?;
            Some(
                hash_password(pin)
                    .map_err(|e| AppError::InternalError(format!("PIN hashing error: {e}")))?,
            )
        }
        None => None,
    };

    if input.pin_enabled && pin_hash.is_none() {
        let current = KaraokeSettingsRepo::get(&state.pool).await?;
        if current.pin_hash.is_none() {
            return Err(AppError::Core(CoreError::Validation(
                "A PIN is required to enable PIN gating".into(),
            )));
        }
    }

    let settings =
        KaraokeSettingsRepo::update(&state.pool, input.pin_enabled, pin_hash.as_deref()).await?;

    tracing::info!(
        pin_enabled = settings.pin_enabled,
        pin_changed = pin_hash.is_some(),
        user_id = admin.user_id,
        "Karaoke settings updated",
    );

    Ok(Json(DataResponse { data: settings }))
}

/// POST /api/v1/karaoke-settings/verify-pin
pub async fn verify_pin(
    State(state): State<AppState>,
    Json(input): Json<VerifyPin>,
) -> AppResult<impl IntoResponse> {
    let settings = KaraokeSettingsRepo::get(&state.pool).await?;
    let valid = pin_unlocks(&settings, Some(&input.pin))?;
    Ok(Json(DataResponse {
        data: PinCheck { valid },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pin_enabled: bool, pin: Option<&str>) -> KaraokeSettings {
        KaraokeSettings {
            pin_enabled,
            pin_hash: pin.map(|p| hash_password(p).unwrap()),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn disabled_gating_accepts_anything() {
        let s = settings(false, Some("1234"));
        assert!(pin_unlocks(&s, None).unwrap());
        assert!(pin_unlocks(&s, Some("0000")).unwrap());
    }

    #[test]
    fn enabled_gating_checks_the_pin() {
        let s = settings(true, Some("1234"));
        assert!(pin_unlocks(&s, Some("1234")).unwrap());
        assert!(pin_unlocks(&s, Some(" 1234 ")).unwrap());
        assert!(!pin_unlocks(&s, Some("9999")).unwrap());
        assert!(!pin_unlocks(&s, None).unwrap());
    }

    #[test]
    fn enabled_gating_without_hash_rejects() {
        let s = settings(true, None);
        assert!(!pin_unlocks(&s, Some("1234")).unwrap());
    }
}
