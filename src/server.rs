use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, error, session::SessionStore};

pub async fn serve(addr: &str) {
    let sessions = Arc::new(SessionStore::new());

    let app = Router::new()
        .route("/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/profile", get(api::profile))
        .route("/playlist-details/{playlist_id}", get(api::playlist_details))
        .route("/liked-songs", get(api::liked_songs))
        .route(
            "/generate-playlist-from-liked",
            get(api::generate_playlist_from_liked),
        )
        .route("/generate-playlist", get(api::generate_playlist))
        .route("/playlist-stats/{playlist_id}", get(api::playlist_stats))
        .route("/generate", get(api::playlists_page))
        .route("/health", get(api::health))
        .layer(Extension(sessions));

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
