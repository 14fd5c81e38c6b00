use std::sync::Arc;

use axum::{Extension, Json, http::HeaderMap, response::Html};

use crate::{
    api::PAGE_LIMIT,
    duration::{self, MAX_TRACK_DURATION_MS},
    error::ApiError,
    pagination,
    session::SessionStore,
    spotify, success,
    types::{GeneratedPlaylist, TrackEntry},
};

const LIKED_PLAYLIST_NAME: &str = "Liked Short Tracks Playlist";
const SAVED_PLAYLIST_NAME: &str = "Short Tracks Playlist";

fn short_track_ids(entries: &[TrackEntry]) -> Vec<String> {
    duration::filter_by_duration(entries, MAX_TRACK_DURATION_MS)
        .iter()
        .map(|entry| entry.track.id.clone())
        .collect()
}

/// Builds a public playlist from every saved track under two minutes.
///
/// Walks the full saved-tracks listing, filters it and creates the playlist
/// under the current user. With no eligible tracks the response is the
/// `{"error": ...}` body and nothing is created.
pub async fn generate_playlist_from_liked(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Json<GeneratedPlaylist>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let access = token.access_token;

    let first = spotify::tracks::saved_tracks(&access, PAGE_LIMIT).await?;
    let entries =
        pagination::fetch_all(first, |cursor| spotify::tracks::page_at(&access, cursor)).await?;
    let short = short_track_ids(&entries);

    // An empty filter result ends the flow here; no user lookup, no playlist.
    if short.is_empty() {
        return Err(ApiError::NoEligibleTracks);
    }

    let user = spotify::user::current_user(&access).await?;
    let playlist =
        spotify::playlist::create_and_populate(&access, &user.id, LIKED_PLAYLIST_NAME, &short, true)
            .await?;
    success!("Created \"{}\" with {} tracks", playlist.name, short.len());

    Ok(Json(GeneratedPlaylist {
        new_playlist_name: playlist.name,
    }))
}

/// Builds a public playlist from the short tracks on the first page of the
/// user's saved tracks.
///
/// Deliberately looks at the first page only; the full-history variant is
/// `/generate-playlist-from-liked`.
pub async fn generate_playlist(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Json<GeneratedPlaylist>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let access = token.access_token;

    let page = spotify::tracks::saved_tracks(&access, PAGE_LIMIT).await?;
    let short = short_track_ids(&page.items);

    // An empty filter result ends the flow here; no user lookup, no playlist.
    if short.is_empty() {
        return Err(ApiError::NoEligibleTracks);
    }

    let user = spotify::user::current_user(&access).await?;
    let playlist =
        spotify::playlist::create_and_populate(&access, &user.id, SAVED_PLAYLIST_NAME, &short, true)
            .await?;
    success!("Created \"{}\" with {} tracks", playlist.name, short.len());

    Ok(Json(GeneratedPlaylist {
        new_playlist_name: playlist.name,
    }))
}

/// Renders an HTML page listing the user's playlists, each linking to its
/// filtered track view.
pub async fn playlists_page(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Html<String>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let page = spotify::playlist::current_user_playlists(&token.access_token, PAGE_LIMIT).await?;

    let items: String = page
        .items
        .iter()
        .map(|playlist| {
            format!(
                "      <li><a href=\"/playlist-details/{}\">{}</a></li>\n",
                playlist.id, playlist.name
            )
        })
        .collect();

    Ok(Html(format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>Your playlists</title>\n  </head>\n  \
         <body>\n    <h1>Your playlists</h1>\n    <ul>\n{}    </ul>\n  </body>\n</html>\n",
        items
    )))
}
