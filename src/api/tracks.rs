use std::sync::Arc;

use axum::{Extension, Json, extract::Path, http::HeaderMap};

use crate::{
    api::PAGE_LIMIT,
    duration::{self, MAX_TRACK_DURATION_MS, PlaylistStats},
    error::ApiError,
    pagination,
    session::SessionStore,
    spotify,
    types::{Page, TrackEntry},
};

/// Returns the tracks of a playlist that run under two minutes.
///
/// Walks every page of the playlist before filtering, so the result covers
/// the whole playlist in its original order.
pub async fn playlist_details(
    Path(playlist_id): Path<String>,
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Json<Vec<TrackEntry>>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let access = token.access_token;

    let first = spotify::tracks::playlist_tracks(&access, &playlist_id, PAGE_LIMIT).await?;
    let entries =
        pagination::fetch_all(first, |cursor| spotify::tracks::page_at(&access, cursor)).await?;

    Ok(Json(duration::filter_by_duration(
        &entries,
        MAX_TRACK_DURATION_MS,
    )))
}

/// Returns the raw first page of the user's saved tracks, unfiltered.
pub async fn liked_songs(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Json<Page<TrackEntry>>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let page = spotify::tracks::saved_tracks(&token.access_token, PAGE_LIMIT).await?;
    Ok(Json(page))
}

/// Returns duration statistics for a playlist, before and after the
/// two-minute filter. An empty playlist (or one the filter empties) reports
/// zeros instead of failing.
pub async fn playlist_stats(
    Path(playlist_id): Path<String>,
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Json<PlaylistStats>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let access = token.access_token;

    let first = spotify::tracks::playlist_tracks(&access, &playlist_id, PAGE_LIMIT).await?;
    let entries =
        pagination::fetch_all(first, |cursor| spotify::tracks::page_at(&access, cursor)).await?;
    let filtered = duration::filter_by_duration(&entries, MAX_TRACK_DURATION_MS);

    Ok(Json(duration::playlist_stats(&entries, &filtered)))
}
