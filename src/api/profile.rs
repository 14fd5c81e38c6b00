use std::sync::Arc;

use axum::{Extension, Json, http::HeaderMap};

use crate::{error::ApiError, session::SessionStore, spotify, types::UserProfile};

/// Returns the authenticated user's Spotify profile.
pub async fn profile(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Json<UserProfile>, ApiError> {
    let token = sessions.authenticated(&headers).await?;
    let user = spotify::user::current_user(&token.access_token).await?;
    Ok(Json(user))
}
