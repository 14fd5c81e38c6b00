//! Service error type and its mapping onto HTTP responses.
//!
//! Three kinds of failure leave a handler: the request carries no usable
//! session (`AuthRequired`), the duration filter left nothing to build a
//! playlist from (`NoEligibleTracks`), or a Spotify call failed
//! (`Upstream`). Handlers return `Result<_, ApiError>` and propagate with
//! `?`; the `IntoResponse` impl decides what the client sees.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::warning;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No session cookie, or one that does not verify. The browser is sent
    /// back to the login route.
    #[error("authentication required")]
    AuthRequired,

    /// The duration filter produced an empty set; no playlist is created.
    #[error("No tracks found under 2 minutes")]
    NoEligibleTracks,

    /// A Spotify Web API call failed. Not retried.
    #[error("spotify request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AuthRequired => Redirect::to("/").into_response(),
            // Reported as a JSON error body, not an HTTP failure.
            err @ ApiError::NoEligibleTracks => {
                Json(json!({ "error": err.to_string() })).into_response()
            }
            ApiError::Upstream(err) => {
                warning!("Spotify request failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
