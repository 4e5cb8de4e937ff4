use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Which optional integrations this instance was started with.
#[derive(Serialize)]
pub struct IntegrationStatus {
    pub distance_lookup: bool,
    pub instagram: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub integrations: IntegrationStatus,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = venue_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        integrations: IntegrationStatus {
            distance_lookup: state.distance.is_some(),
            instagram: state.media.is_some(),
        },
    })
}

/// Health lives at the root so load balancers need no API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
