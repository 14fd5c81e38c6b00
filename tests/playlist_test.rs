use shortlist::error::ApiError;
use shortlist::spotify::playlist::create_and_populate;

#[tokio::test]
async fn test_empty_track_set_creates_nothing() {
    // With no eligible tracks the guard fires before any Spotify call, so
    // the error comes back even with unusable credentials and no network.
    let result = create_and_populate("no-token", "user", "Short Tracks Playlist", &[], true).await;

    assert!(matches!(result, Err(ApiError::NoEligibleTracks)));
}
