//! # Spotify Integration Module
//!
//! This module is the integration layer between Shortlist and the Spotify
//! Web API. It handles all HTTP communication: the OAuth authorization-code
//! flow, user and library reads, and playlist writes. Higher layers only see
//! typed records from [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code flow)
//!     ├── User profile
//!     ├── Track listings (saved tracks, playlist tracks)
//!     └── Playlist operations (create, populate, list)
//!          ↓
//! HTTP layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication strategy
//!
//! Shortlist is a server-side (confidential) client, so [`auth`] implements
//! the plain authorization-code flow: the browser is redirected to Spotify's
//! authorize endpoint, and the callback code is exchanged for an access token
//! using the client ID and secret as HTTP Basic credentials. The token is
//! scoped to one browser session and never refreshed; when it expires, the
//! user logs in again.
//!
//! ## API coverage
//!
//! - `GET /me` - current user profile
//! - `GET /me/tracks` - saved tracks, paged
//! - `GET /me/playlists` - the user's playlists
//! - `GET /playlists/{id}/tracks` - playlist tracks, paged
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks to a playlist
//! - `POST /api/token` - authorization-code exchange
//!
//! ## Error handling
//!
//! Every function returns `Result`; network and API errors are propagated to
//! the caller as `reqwest::Error` and not retried. Paged listings expose
//! their continuation cursor through [`crate::types::Page`], which
//! [`crate::pagination::fetch_all`] drives to exhaustion.

pub mod auth;
pub mod playlist;
pub mod tracks;
pub mod user;
