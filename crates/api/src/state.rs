use std::sync::Arc;

use venue_integrations::{DistanceLookup, GoogleMapsClient, GraphClient, MediaSource};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: venue_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Distance lookup for mileage trips; `None` when no Maps key is set.
    pub distance: Option<Arc<dyn DistanceLookup>>,
    /// Instagram media source; `None` when Graph credentials are missing.
    pub media: Option<Arc<dyn MediaSource>>,
}

impl AppState {
    /// Build the state, creating real API clients for every configured
    /// integration.
    pub fn from_config(pool: venue_db::DbPool, config: ServerConfig) -> Self {
        let integrations = &config.integrations;

        let distance = integrations.google_maps_api_key.clone().map(|key| {
            Arc::new(GoogleMapsClient::new(key)) as Arc<dyn DistanceLookup>
        });

        let media = match (
            &integrations.facebook_access_token,
            &integrations.instagram_account_id,
        ) {
            (Some(token), Some(account)) => Some(Arc::new(GraphClient::new(
                integrations.graph_api_base_url.clone(),
                token.clone(),
                account.clone(),
            )) as Arc<dyn MediaSource>),
            _ => None,
        };

        Self {
            pool,
            config: Arc::new(config),
            distance,
            media,
        }
    }
}
