//! Google Maps Distance Matrix client used for mileage lookups.

use async_trait::async_trait;
use serde::Deserialize;
use venue_core::finance::meters_to_miles;

use crate::error::{ensure_success, IntegrationError};

/// Production Distance Matrix endpoint root.
pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Looks up the driving distance between two free-form locations.
#[async_trait]
pub trait DistanceLookup: Send + Sync {
    /// One-way driving distance in miles (one decimal place).
    async fn distance_miles(&self, origin: &str, destination: &str)
        -> Result<f64, IntegrationError>;
}

/// HTTP client for the Distance Matrix API.
pub struct GoogleMapsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(reqwest::Client::new(), DEFAULT_MAPS_BASE_URL.to_string(), api_key)
    }

    /// Create a client against a different endpoint root, reusing `client`.
    pub fn with_base_url(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl DistanceLookup for GoogleMapsClient {
    async fn distance_miles(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<f64, IntegrationError> {
        let response = self
            .client
            .get(format!("{}/distancematrix/json", self.base_url))
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("units", "imperial"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let body: DistanceMatrixResponse = ensure_success(response).await?.json().await?;
        let meters = first_distance_meters(&body)?;
        tracing::debug!(origin, destination, meters, "Distance matrix lookup");
        Ok(meters_to_miles(meters))
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    status: String,
    distance: Option<Distance>,
}

#[derive(Debug, Deserialize)]
struct Distance {
    /// Meters, regardless of the requested unit system.
    value: f64,
}

/// Pull the distance of the single origin/destination pair out of a
/// response, mapping top-level and element statuses to errors.
fn first_distance_meters(body: &DistanceMatrixResponse) -> Result<f64, IntegrationError> {
    if body.status != "OK" {
        let detail = body.error_message.as_deref().unwrap_or("no error message");
        return Err(IntegrationError::Unusable(format!(
            "distance matrix status {}: {detail}",
            body.status
        )));
    }

    let element = body
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| IntegrationError::Unusable("distance matrix returned no rows".into()))?;

    if element.status != "OK" {
        return Err(IntegrationError::Unusable(format!(
            "no route found ({})",
            element.status
        )));
    }

    element
        .distance
        .as_ref()
        .map(|d| d.value)
        .ok_or_else(|| IntegrationError::Unusable("route has no distance".into()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn parse(json: &str) -> DistanceMatrixResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reads_first_element_distance() {
        let body = parse(
            r#"{
                "status": "OK",
                "origin_addresses": ["Austin, TX"],
                "destination_addresses": ["Round Rock, TX"],
                "rows": [{"elements": [{
                    "status": "OK",
                    "distance": {"text": "19.6 mi", "value": 31543},
                    "duration": {"text": "24 mins", "value": 1440}
                }]}]
            }"#,
        );
        let meters = first_distance_meters(&body).unwrap();
        assert_eq!(meters, 31543.0);
        assert_eq!(meters_to_miles(meters), 19.6);
    }

    #[test]
    fn test_top_level_failure() {
        let body = parse(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "rows": []}"#,
        );
        assert_matches!(
            first_distance_meters(&body),
            Err(IntegrationError::Unusable(msg)) if msg.contains("REQUEST_DENIED")
        );
    }

    #[test]
    fn test_element_without_route() {
        let body = parse(r#"{"status": "OK", "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}]}"#);
        assert_matches!(
            first_distance_meters(&body),
            Err(IntegrationError::Unusable(msg)) if msg.contains("ZERO_RESULTS")
        );
    }

    #[test]
    fn test_empty_rows() {
        let body = parse(r#"{"status": "OK", "rows": []}"#);
        assert_matches!(first_distance_meters(&body), Err(IntegrationError::Unusable(_)));
    }
}
