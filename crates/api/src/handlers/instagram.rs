//! Handlers for the cached Instagram feed.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use venue_db::models::instagram_post::UpsertInstagramPost;
use venue_db::repositories::InstagramPostRepo;
use venue_integrations::MediaItem;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LimitParams, DEFAULT_POST_LIMIT, MAX_POST_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of media items requested per refresh.
const REFRESH_BATCH: u32 = 25;

/// Result of `POST /instagram-posts/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResult {
    pub fetched: usize,
    pub upserted: u64,
}

fn to_upsert(item: MediaItem) -> UpsertInstagramPost {
    UpsertInstagramPost {
        external_id: item.id,
        caption: item.caption,
        media_type: item.media_type,
        media_url: item.media_url,
        permalink: item.permalink,
        posted_at: item.posted_at,
    }
}

/// GET /api/v1/instagram-posts?limit=
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.clamped(DEFAULT_POST_LIMIT, MAX_POST_LIMIT);
    let posts = InstagramPostRepo::list(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/instagram-posts/refresh
///
/// Pull recent media from the Graph API and upsert it by external id.
pub async fn refresh_posts(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let source = state.media.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Instagram integration is not configured".into())
    })?;

    let items = source.recent_media(REFRESH_BATCH).await?;
    let fetched = items.len();
    let posts: Vec<UpsertInstagramPost> = items.into_iter().map(to_upsert).collect();
    let upserted = InstagramPostRepo::upsert_many(&state.pool, &posts).await?;

    tracing::info!(fetched, upserted, user_id = admin.user_id, "Instagram posts refreshed");

    Ok(Json(DataResponse {
        data: RefreshResult { fetched, upserted },
    }))
}
