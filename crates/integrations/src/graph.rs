//! Facebook Graph API client for an Instagram business account's media.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ensure_success, IntegrationError};

/// Media fields requested from the Graph API.
const MEDIA_FIELDS: &str = "id,caption,media_type,media_url,permalink,timestamp";

/// One Instagram media item.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub caption: Option<String>,
    pub media_type: String,
    pub media_url: Option<String>,
    pub permalink: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// Source of recent media for the configured account.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Up to `limit` most recent items, newest first.
    async fn recent_media(&self, limit: u32) -> Result<Vec<MediaItem>, IntegrationError>;
}

/// HTTP client for the `/{account}/media` edge.
pub struct GraphClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
    account_id: String,
}

impl GraphClient {
    /// * `base_url` - versioned API root, e.g. `https://graph.facebook.com/v19.0`.
    pub fn new(base_url: String, access_token: String, account_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            access_token,
            account_id,
        }
    }
}

#[async_trait]
impl MediaSource for GraphClient {
    async fn recent_media(&self, limit: u32) -> Result<Vec<MediaItem>, IntegrationError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(format!("{}/{}/media", self.base_url, self.account_id))
            .query(&[
                ("fields", MEDIA_FIELDS),
                ("limit", limit.as_str()),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await?;

        let page: MediaPage = ensure_success(response).await?.json().await?;
        tracing::debug!(count = page.data.len(), "Fetched Instagram media");
        Ok(page.data.into_iter().map(MediaItem::from).collect())
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct MediaPage {
    #[serde(default)]
    data: Vec<RawMedia>,
}

#[derive(Debug, Deserialize)]
struct RawMedia {
    id: String,
    caption: Option<String>,
    media_type: Option<String>,
    media_url: Option<String>,
    permalink: Option<String>,
    timestamp: Option<String>,
}

impl From<RawMedia> for MediaItem {
    fn from(raw: RawMedia) -> Self {
        Self {
            posted_at: raw.timestamp.as_deref().and_then(parse_graph_timestamp),
            id: raw.id,
            caption: raw.caption,
            media_type: raw.media_type.unwrap_or_else(|| "IMAGE".to_string()),
            media_url: raw.media_url,
            permalink: raw.permalink,
        }
    }
}

/// Graph timestamps look like `2024-05-01T18:30:00+0000` (no colon in the
/// offset), so RFC 3339 parsing alone is not enough.
fn parse_graph_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
