//! # API Module
//!
//! HTTP handlers for the Shortlist endpoints, one file per handler group:
//!
//! - [`login`] / [`callback`] - OAuth entry and code-for-token exchange
//! - [`profile`] - the authenticated user's profile as JSON
//! - [`playlist_details`] / [`liked_songs`] / [`playlist_stats`] - library
//!   reads, duration filtering and statistics
//! - [`generate_playlist`] / [`generate_playlist_from_liked`] - short-track
//!   playlist generation
//! - [`playlists_page`] - HTML listing of the user's playlists
//! - [`health`] - health check for monitoring
//!
//! Handlers authenticate through the shared
//! [`SessionStore`](crate::session::SessionStore) (an axum `Extension`);
//! a request without a valid session cookie is redirected to `/` by
//! [`ApiError::AuthRequired`](crate::error::ApiError).

mod auth;
mod health;
mod playlists;
mod profile;
mod tracks;

pub use auth::{callback, login};
pub use health::health;
pub use playlists::{generate_playlist, generate_playlist_from_liked, playlists_page};
pub use profile::profile;
pub use tracks::{liked_songs, playlist_details, playlist_stats};

/// Page size requested from Spotify list endpoints.
pub(crate) const PAGE_LIMIT: u32 = 50;
