use axum::body::to_bytes;
use axum::http::{StatusCode, header::LOCATION};
use axum::response::IntoResponse;
use serde_json::{Value, json};

use shortlist::error::ApiError;

#[test]
fn test_auth_required_redirects_to_login() {
    let response = ApiError::AuthRequired.into_response();

    // The browser is sent back to the login route
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn test_no_eligible_tracks_is_a_json_error_body() {
    let response = ApiError::NoEligibleTracks.into_response();

    // Reported as data, not as an HTTP failure
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "No tracks found under 2 minutes" }));
}
