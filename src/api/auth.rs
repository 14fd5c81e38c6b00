use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    error::ApiError,
    session::{SESSION_COOKIE, SessionStore},
    spotify, success,
};

/// Entry point of the login flow: redirects the browser to Spotify's
/// authorization page.
pub async fn login() -> Redirect {
    Redirect::to(&spotify::auth::authorize_url())
}

/// OAuth callback: exchanges the authorization code for a token, stores it
/// in a fresh session and sends the browser on to `/profile` with the
/// session cookie set.
///
/// A callback without a `code` parameter (denied consent, manual visit)
/// restarts the flow at `/`.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> Result<Response, ApiError> {
    let code = params.get("code").ok_or(ApiError::AuthRequired)?;

    let token = spotify::auth::exchange_code(code).await?;
    let cookie = sessions.create(token).await;
    success!("Browser session authenticated");

    let mut response = Redirect::to("/profile").into_response();
    response.headers_mut().insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, cookie))
            .expect("session cookie is ASCII"),
    );
    Ok(response)
}
