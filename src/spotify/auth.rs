use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Builds the Spotify authorization URL the browser is redirected to.
///
/// Requests an authorization code for the configured client, redirect URI
/// and scope. Spotify sends the user back to the redirect URI with a `code`
/// query parameter once they grant access.
pub fn authorize_url() -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = &config::spotify_auth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = config::spotify_scope().replace(' ', "%20"),
    )
}

/// Exchanges an authorization code for an access token.
///
/// Final step of the authorization-code flow: posts the code to the token
/// endpoint, authenticating with the client ID and secret as HTTP Basic
/// credentials. The redirect URI must match the one used in the authorize
/// request.
///
/// The authorization code is single-use and short-lived, so the exchange
/// happens immediately in the callback handler. Failures (invalid code,
/// network error, service error) are propagated to the caller.
pub async fn exchange_code(code: &str) -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_token_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
