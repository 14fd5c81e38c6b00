use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

use shortlist::error::ApiError;
use shortlist::session::{SESSION_COOKIE, SessionStore, cookie_value};
use shortlist::types::Token;

// Helper function to create a test token
fn create_test_token(access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        refresh_token: "refresh".to_string(),
        scope: "user-library-read".to_string(),
        expires_in: 3600,
        obtained_at: 1_700_000_000,
    }
}

fn headers_with_cookie(raw: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(raw).unwrap());
    headers
}

#[tokio::test]
async fn test_create_and_lookup_round_trip() {
    let store = SessionStore::new();
    let cookie = store.create(create_test_token("BQC123")).await;

    // Cookie value carries id and signature separated by a dot
    assert!(cookie.contains('.'));

    let token = store.token(&cookie).await.unwrap();
    assert_eq!(token.access_token, "BQC123");
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let store = SessionStore::new();
    let first = store.create(create_test_token("first")).await;
    let second = store.create(create_test_token("second")).await;

    assert_ne!(first, second);
    assert_eq!(store.token(&first).await.unwrap().access_token, "first");
    assert_eq!(store.token(&second).await.unwrap().access_token, "second");
}

#[tokio::test]
async fn test_tampered_signature_is_rejected() {
    let store = SessionStore::new();
    let cookie = store.create(create_test_token("BQC123")).await;

    let (id, _signature) = cookie.split_once('.').unwrap();
    let forged = format!("{}.forged-signature", id);

    assert!(store.token(&forged).await.is_none());
}

#[tokio::test]
async fn test_malformed_cookie_is_rejected() {
    let store = SessionStore::new();
    store.create(create_test_token("BQC123")).await;

    // No separator at all
    assert!(store.token("not-a-session-cookie").await.is_none());
}

#[tokio::test]
async fn test_clear_removes_session() {
    let store = SessionStore::new();
    let cookie = store.create(create_test_token("BQC123")).await;

    store.clear(&cookie).await;

    assert!(store.token(&cookie).await.is_none());
}

#[tokio::test]
async fn test_fresh_store_invalidates_old_cookies() {
    let first_store = SessionStore::new();
    let cookie = first_store.create(create_test_token("BQC123")).await;

    // A new store has a new secret, as after a process restart
    let second_store = SessionStore::new();
    assert!(second_store.token(&cookie).await.is_none());
}

#[tokio::test]
async fn test_authenticated_resolves_session_cookie() {
    let store = SessionStore::new();
    let cookie = store.create(create_test_token("BQC123")).await;

    let headers = headers_with_cookie(&format!("other=1; {}={}", SESSION_COOKIE, cookie));
    let token = store.authenticated(&headers).await.unwrap();

    assert_eq!(token.access_token, "BQC123");
}

#[tokio::test]
async fn test_authenticated_without_cookie_requires_login() {
    let store = SessionStore::new();

    let result = store.authenticated(&HeaderMap::new()).await;

    assert!(matches!(result, Err(ApiError::AuthRequired)));
}

#[test]
fn test_cookie_value_parses_header_pairs() {
    let headers = headers_with_cookie("a=b; session=abc.def; theme=dark");

    assert_eq!(cookie_value(&headers, "session").unwrap(), "abc.def");
    assert_eq!(cookie_value(&headers, "theme").unwrap(), "dark");
    assert!(cookie_value(&headers, "missing").is_none());
}
