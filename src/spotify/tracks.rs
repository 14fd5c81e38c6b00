use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    types::{Page, TrackEntry},
};

/// Retrieves one page of the user's saved tracks ("liked songs").
///
/// Returns the first page when called with a fresh listing; follow-up pages
/// are fetched through [`page_at`] using the page's continuation cursor.
pub async fn saved_tracks(token: &str, limit: u32) -> Result<Page<TrackEntry>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/tracks?limit={limit}",
        uri = &config::spotify_api_url(),
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Page<TrackEntry>>().await
}

/// Retrieves one page of the tracks of a playlist.
pub async fn playlist_tracks(
    token: &str,
    playlist_id: &str,
    limit: u32,
) -> Result<Page<TrackEntry>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_api_url(),
        id = playlist_id,
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Page<TrackEntry>>().await
}

/// Fetches the page behind a continuation cursor.
///
/// Spotify's `next` field is a complete URL, so the cursor is consumed
/// as-is. Used by the pagination driver to walk a listing to exhaustion.
pub async fn page_at<T: DeserializeOwned>(
    token: &str,
    url: String,
) -> Result<Page<T>, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Page<T>>().await
}
