use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Json, extract::Query, response::Html};
use reqwest::StatusCode;
use spotify_import::api::{callback, health};
use spotify_import::config::SpotifyConfig;
use spotify_import::management::TokenManager;
use spotify_import::server::SharedSession;
use spotify_import::spotify::{
    auth::{authorize_url, wait_for_code},
    error_message,
    matching::{FirstCandidate, MatchStrategy},
};
use spotify_import::types::{AlbumArtist, AuthSession, CatalogAlbum, SimplifiedAlbum, Token};
use tokio::sync::Mutex;

fn session(state: &str) -> SharedSession {
    Arc::new(Mutex::new(AuthSession {
        state: state.to_string(),
        code: None,
        error: None,
    }))
}

fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn album(id: &str, name: &str, artists: &[&str]) -> SimplifiedAlbum {
    SimplifiedAlbum {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| AlbumArtist {
                name: a.to_string(),
            })
            .collect(),
    }
}

fn token(scope: &str, obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: scope.to_string(),
        expires_in,
        obtained_at,
    }
}

#[tokio::test]
async fn test_callback_stores_code_for_matching_state() {
    let shared = session("abc");

    let Html(page) = callback(
        params(&[("code", "AQA123"), ("state", "abc")]),
        Extension(Arc::clone(&shared)),
    )
    .await;
    assert!(page.contains("Authentication successful"));

    let state = shared.lock().await;
    assert_eq!(state.code.as_deref(), Some("AQA123"));
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_callback_rejects_state_mismatch() {
    let shared = session("abc");

    let Html(page) = callback(
        params(&[("code", "AQA123"), ("state", "forged")]),
        Extension(Arc::clone(&shared)),
    )
    .await;
    assert!(page.contains("state mismatch"));

    let state = shared.lock().await;
    assert!(state.code.is_none());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn test_callback_records_denial() {
    let shared = session("abc");

    let Html(page) = callback(
        params(&[("error", "access_denied"), ("state", "abc")]),
        Extension(Arc::clone(&shared)),
    )
    .await;
    assert!(page.contains("Login failed"));

    assert_eq!(
        shared.lock().await.error.as_deref(),
        Some("access_denied")
    );
}

#[tokio::test]
async fn test_wait_for_code() {
    let shared = session("abc");
    shared.lock().await.code = Some("AQA123".to_string());
    assert_eq!(
        wait_for_code(&shared, Duration::from_secs(5)).await.unwrap(),
        "AQA123"
    );

    let denied = session("abc");
    denied.lock().await.error = Some("access_denied".to_string());
    let err = wait_for_code(&denied, Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(err.is_remote());

    let silent = session("abc");
    let err = wait_for_code(&silent, Duration::from_millis(10))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_health() {
    let Json(body) = health().await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_authorize_url() {
    let config =
        SpotifyConfig::new(Some("client".to_string()), Some("secret".to_string())).unwrap();

    let url = authorize_url(&config, "challenge", "state123").unwrap();
    let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert!(url.as_str().starts_with("https://accounts.spotify.com/authorize?"));
    assert_eq!(query["client_id"], "client");
    assert_eq!(query["response_type"], "code");
    assert_eq!(query["redirect_uri"], "http://localhost:8000/callback");
    assert_eq!(query["code_challenge_method"], "S256");
    assert_eq!(query["code_challenge"], "challenge");
    assert_eq!(query["state"], "state123");
    assert_eq!(query["scope"], "user-library-modify");
    assert!(!url.as_str().contains("secret"));
}

#[test]
fn test_error_message() {
    assert_eq!(
        error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"status":401,"message":"The access token expired"}}"#
        ),
        "401 Unauthorized: The access token expired"
    );
    assert_eq!(
        error_message(StatusCode::BAD_GATEWAY, "upstream hiccup\n"),
        "502 Bad Gateway: upstream hiccup"
    );
    assert_eq!(
        error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
        "503 Service Unavailable"
    );
}

#[test]
fn test_first_candidate_takes_first_result() {
    let candidates = vec![
        album("1", "Abbey Road (Remastered)", &["The Beatles"]),
        album("2", "Abbey Road", &["The Beatles"]),
    ];

    let picked = FirstCandidate.select("beatles", "abbey road", &candidates);
    assert_eq!(picked.map(|a| a.id.as_str()), Some("1"));
    assert!(FirstCandidate.select("beatles", "abbey road", &[]).is_none());
}

#[test]
fn test_catalog_album_uses_first_artist() {
    let found = CatalogAlbum::from(&album("X123", "Watch the Throne", &["JAY-Z", "Kanye West"]));
    assert_eq!(
        found,
        CatalogAlbum {
            id: "X123".to_string(),
            name: "Watch the Throne".to_string(),
            artist: "JAY-Z".to_string(),
        }
    );

    let anonymous = CatalogAlbum::from(&album("Y1", "Untitled", &[]));
    assert_eq!(anonymous.artist, "");
}

#[test]
fn test_token_expiry_margin() {
    let mgr = TokenManager::new(token("user-library-modify", 1_000, 3_600));

    assert!(!mgr.is_expired_at(1_000));
    assert!(!mgr.is_expired_at(4_359));
    assert!(mgr.is_expired_at(4_360));
    assert!(mgr.is_expired_at(10_000));

    let short = TokenManager::new(token("user-library-modify", 1_000, 60));
    assert!(short.is_expired_at(1_000));
}

#[test]
fn test_token_scope_coverage() {
    let mgr = TokenManager::new(token("user-library-read user-library-modify", 0, 3_600));
    assert!(mgr.covers_scope("user-library-modify"));
    assert!(!mgr.covers_scope("user-library-modify playlist-modify-private"));

    let narrow = TokenManager::new(token("user-library-read", 0, 3_600));
    assert!(!narrow.covers_scope("user-library-modify"));
}

#[tokio::test]
async fn test_callback_without_code_stores_nothing() {
    let shared = session("abc");

    let Html(page) = callback(params(&[("state", "abc")]), Extension(Arc::clone(&shared))).await;

    assert!(page.contains("Missing authorization code"));
    let state = shared.lock().await;
    assert!(state.code.is_none());
    assert!(state.error.is_none());
}
