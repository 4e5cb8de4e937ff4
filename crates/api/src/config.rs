use venue_core::finance::DEFAULT_MILEAGE_RATE;

use crate::auth::jwt::JwtConfig;

/// Default Graph API root (versioned).
pub const DEFAULT_GRAPH_API_BASE_URL: &str = "https://graph.facebook.com/v19.0";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string.
    pub database_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Third-party API credentials.
    pub integrations: IntegrationConfig,
    /// Deduction per mile used by the finance summary.
    pub mileage_rate: f64,
}

/// Credentials for the optional external services. A service whose
/// credentials are missing is disabled and its endpoints answer 503.
#[derive(Debug, Clone, Default)]
pub struct IntegrationConfig {
    pub google_maps_api_key: Option<String>,
    pub facebook_access_token: Option<String>,
    pub instagram_account_id: Option<String>,
    pub graph_api_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                             |
    /// |-------------------------|-------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                           |
    /// | `PORT`                  | `5000`                              |
    /// | `CORS_ORIGINS`          | `http://localhost:5174`             |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                |
    /// | `DATABASE_URL`          | `sqlite:venue.db?mode=rwc`          |
    /// | `GOOGLE_MAPS_API_KEY`   | unset (mileage lookup disabled)     |
    /// | `FACEBOOK_ACCESS_TOKEN` | unset (Instagram refresh disabled)  |
    /// | `INSTAGRAM_ACCOUNT_ID`  | unset (Instagram refresh disabled)  |
    /// | `GRAPH_API_BASE_URL`    | `https://graph.facebook.com/v19.0`  |
    /// | `MILEAGE_RATE`          | `0.70`                              |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5174".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:venue.db?mode=rwc".into());

        let mileage_rate: f64 = std::env::var("MILEAGE_RATE")
            .map(|v| v.parse().expect("MILEAGE_RATE must be a valid number"))
            .unwrap_or(DEFAULT_MILEAGE_RATE);
        assert!(
            mileage_rate.is_finite() && mileage_rate >= 0.0,
            "MILEAGE_RATE must be non-negative"
        );

        let integrations = IntegrationConfig {
            google_maps_api_key: non_empty_var("GOOGLE_MAPS_API_KEY"),
            facebook_access_token: non_empty_var("FACEBOOK_ACCESS_TOKEN"),
            instagram_account_id: non_empty_var("INSTAGRAM_ACCOUNT_ID"),
            graph_api_base_url: std::env::var("GRAPH_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GRAPH_API_BASE_URL.into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            jwt: JwtConfig::from_env(),
            integrations,
            mileage_rate,
        }
    }
}

/// Read an optional variable, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
