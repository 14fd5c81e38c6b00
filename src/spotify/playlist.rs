use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, Page, Playlist},
};

/// Retrieves one page of the user's playlists.
pub async fn current_user_playlists(
    token: &str,
    limit: u32,
) -> Result<Page<Playlist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/playlists?limit={limit}",
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

    response.json::<Page<Playlist>>().await
}

/// Creates an empty playlist owned by `user_id`.
pub async fn create(
    token: &str,
    user_id: &str,
    name: &str,
    public: bool,
) -> Result<Playlist, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_api_url(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Tracks under 2 minutes, picked from your library.".to_string(),
        public,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Playlist>().await
}

/// Adds tracks to a playlist in a single batch call.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_api_url(),
        id = playlist_id
    );

    let body = AddTracksRequest {
        uris: track_ids
            .iter()
            .map(|id| format!("spotify:track:{}", id))
            .collect(),
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}

/// Creates a playlist under `user_id` and populates it with `track_ids`.
///
/// An empty `track_ids` fails with [`ApiError::NoEligibleTracks`] before any
/// external call is made; the service never produces empty playlists.
///
/// Creation and population are two separate Spotify calls with no
/// compensating rollback: if adding the tracks fails after creation
/// succeeded, the empty playlist remains on the user's account.
pub async fn create_and_populate(
    token: &str,
    user_id: &str,
    name: &str,
    track_ids: &[String],
    public: bool,
) -> Result<Playlist, ApiError> {
    if track_ids.is_empty() {
        return Err(ApiError::NoEligibleTracks);
    }

    let playlist = create(token, user_id, name, public).await?;
    add_tracks(token, &playlist.id, track_ids).await?;

    Ok(playlist)
}
