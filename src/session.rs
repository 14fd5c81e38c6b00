//! In-memory browser session store.
//!
//! Each authenticated browser gets a random session id whose token lives in
//! a process-local map; the cookie sent to the browser is `id.signature`,
//! signed with a secret generated at startup. Restarting the process rotates
//! the secret and invalidates every previously issued cookie, which is the
//! intended lifecycle: sessions are transient and never persisted.
//!
//! Tokens are never shared across sessions, and there is no refresh or
//! expiry handling here; an expired access token simply surfaces as an
//! upstream error on the next Spotify call.

use std::collections::HashMap;

use axum::http::{HeaderMap, header::COOKIE};
use tokio::sync::RwLock;

use crate::{error::ApiError, types::Token, utils};

/// Name of the session cookie issued after the OAuth callback.
pub const SESSION_COOKIE: &str = "session";

pub struct SessionStore {
    secret: String,
    sessions: RwLock<HashMap<String, Token>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            secret: utils::generate_session_secret(),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `token` under a fresh session id and returns the signed cookie
    /// value to hand to the browser.
    pub async fn create(&self, token: Token) -> String {
        let session_id = utils::generate_session_id();
        let signature = utils::cookie_signature(&self.secret, &session_id);

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), token);

        format!("{}.{}", session_id, signature)
    }

    /// Looks up the token behind a cookie value. Returns `None` for a
    /// malformed or tampered cookie as well as for an unknown session id.
    pub async fn token(&self, cookie_value: &str) -> Option<Token> {
        let session_id = self.verify(cookie_value)?;
        let sessions = self.sessions.read().await;
        sessions.get(&session_id).cloned()
    }

    /// Drops the session behind a cookie value, if any.
    ///
    /// No endpoint exposes logout; this completes the store's lifecycle.
    /// Deployed sessions otherwise end when the process restarts.
    pub async fn clear(&self, cookie_value: &str) {
        if let Some(session_id) = self.verify(cookie_value) {
            let mut sessions = self.sessions.write().await;
            sessions.remove(&session_id);
        }
    }

    /// Resolves the request's session cookie to a token, or signals that the
    /// caller must be redirected to login.
    pub async fn authenticated(&self, headers: &HeaderMap) -> Result<Token, ApiError> {
        let cookie = cookie_value(headers, SESSION_COOKIE).ok_or(ApiError::AuthRequired)?;
        self.token(&cookie).await.ok_or(ApiError::AuthRequired)
    }

    fn verify(&self, cookie_value: &str) -> Option<String> {
        let (session_id, signature) = cookie_value.split_once('.')?;
        // Not a constant-time comparison; forging a cookie still requires
        // the process-local secret.
        if utils::cookie_signature(&self.secret, session_id) == signature {
            Some(session_id.to_string())
        } else {
            None
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a cookie by name from the request's `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
