//! Configuration management for Shortlist.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. Spotify
//! application credentials are required; API endpoints, OAuth scope and the
//! listen address fall back to sensible defaults.

use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error; in that case the process
/// environment is used as-is. Required variables are checked lazily by the
/// individual accessors below.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Used together with the client ID as HTTP Basic credentials against the
/// token endpoint. The secret should never appear in logs or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered for this application.
///
/// Spotify redirects the user's browser here after authorization. Must match
/// the redirect URI configured in the Spotify application settings exactly.
///
/// # Panics
///
/// Panics if the `REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("REDIRECT_URI").expect("REDIRECT_URI must be set")
}

/// Returns the OAuth scope requested during authorization.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_SCOPE")
        .unwrap_or_else(|_| "playlist-read-private user-library-read playlist-modify-public".into())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| "https://accounts.spotify.com/authorize".into())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".into())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".into())
}

/// Returns the address the HTTP server binds to.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".into())
}
