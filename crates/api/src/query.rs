//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default number of cached Instagram posts returned.
pub const DEFAULT_POST_LIMIT: i64 = 12;
/// Upper bound for `?limit=` on the Instagram listing.
pub const MAX_POST_LIMIT: i64 = 50;

/// `?limit=` for short listings.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    /// Clamp the requested limit into `1..=max`, falling back to `default`.
    pub fn clamped(&self, default: i64, max: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, max)
    }
}

/// `?include_complete=` for DJ notes.
#[derive(Debug, Deserialize)]
pub struct IncludeCompleteParams {
    #[serde(default)]
    pub include_complete: bool,
}

/// `?year=` for yearly reports.
#[derive(Debug, Default, Deserialize)]
pub struct YearParams {
    pub year: Option<i32>,
}

/// `?service=` filter for public reviews.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceFilter {
    pub service: Option<String>,
}

/// `?origin=&destination=` for the raw distance lookup.
#[derive(Debug, Deserialize)]
pub struct DistanceParams {
    pub origin: String,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        let params = LimitParams { limit: None };
        assert_eq!(params.clamped(DEFAULT_POST_LIMIT, MAX_POST_LIMIT), 12);
    }

    #[test]
    fn limit_is_clamped_into_range() {
        assert_eq!(LimitParams { limit: Some(0) }.clamped(12, 50), 1);
        assert_eq!(LimitParams { limit: Some(-4) }.clamped(12, 50), 1);
        assert_eq!(LimitParams { limit: Some(500) }.clamped(12, 50), 50);
        assert_eq!(LimitParams { limit: Some(7) }.clamped(12, 50), 7);
    }
}
