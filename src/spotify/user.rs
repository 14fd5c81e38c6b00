use reqwest::Client;

use crate::{config, types::UserProfile};

/// Retrieves the profile of the user the token belongs to.
///
/// The profile id is also the owner under which generated playlists are
/// created.
pub async fn current_user(token: &str) -> Result<UserProfile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_api_url());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<UserProfile>().await
}
