//! # Spotify Integration Module
//!
//! This module is the only place that talks to the Spotify Web API. It offers
//! the three catalog operations an import needs through the [`Catalog`] trait
//! and implements them against the real service in [`SpotifyCatalog`].
//!
//! ## Architecture
//!
//! ```text
//! Import pipeline (processor, orchestrator)
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyCatalog
//!     ├── Authentication (authorization code + PKCE, token cache)
//!     ├── Album lookups (search, track listing)
//!     └── Library updates (save albums)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Interactive authorization, code exchange and token refresh
//! - [`albums`] - `GET /search` and `GET /albums/{id}/tracks`
//! - [`library`] - `PUT /me/albums`
//! - [`matching`] - Picks the catalog album that stands for a folder
//!
//! ## Error Handling
//!
//! There is no retry or rate-limit handling. A non-success status
//! becomes [`ImportError::RemoteService`] and a transport failure becomes
//! [`ImportError::Transport`]; either one ends the import run.
//!
//! ## Usage Patterns
//!
//! ```rust,ignore
//! let config = SpotifyConfig::from_env()?;
//! let catalog = SpotifyCatalog::connect(config).await?;
//!
//! if let SearchOutcome::Found(album) = catalog.search_album("Portishead", "Dummy").await? {
//!     let tracks = catalog.list_tracks(&album.id).await?;
//!     catalog.add_to_library(&album.id).await?;
//! }
//! ```

pub mod albums;
pub mod auth;
pub mod library;
pub mod matching;

use reqwest::{Client, Response};
use tokio::sync::Mutex;

use crate::{
    config::SpotifyConfig,
    error::{ImportError, Result},
    management::TokenManager,
    success,
    types::{CatalogAlbum, SearchOutcome, SpotifyErrorResponse},
    utils, warning,
};

use matching::{FirstCandidate, MatchStrategy};

/// The remote operations an import run depends on.
///
/// Implemented by [`SpotifyCatalog`] for real runs and by stubs in tests.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Looks up one album by artist and album name.
    async fn search_album(&self, artist: &str, album: &str) -> Result<SearchOutcome>;

    /// Track ids of the first page of an album's track listing.
    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>>;

    /// Saves the album to the current user's library. Saving twice is harmless.
    async fn add_to_library(&self, album_id: &str) -> Result<()>;
}

/// [`Catalog`] backed by the Spotify Web API.
pub struct SpotifyCatalog<M = FirstCandidate> {
    http: Client,
    config: SpotifyConfig,
    tokens: Mutex<TokenManager>,
    matcher: M,
}

impl SpotifyCatalog {
    /// Connects with the default first-result matching.
    pub async fn connect(config: SpotifyConfig) -> Result<Self> {
        Self::connect_with(config, FirstCandidate).await
    }
}

impl<M: MatchStrategy> SpotifyCatalog<M> {
    /// Reuses the cached token when it carries the configured scope, otherwise
    /// runs the interactive authorization flow and caches the new token.
    pub async fn connect_with(config: SpotifyConfig, matcher: M) -> Result<Self> {
        let http = Client::new();

        let token_mgr = match TokenManager::load().await {
            Ok(mgr) if mgr.covers_scope(&config.scope) => mgr,
            _ => {
                let token = auth::authorize(&http, &config).await?;
                let mgr = TokenManager::new(token);
                if let Err(e) = mgr.persist().await {
                    warning!("Failed to save token to cache: {}", e);
                }
                success!("Authentication successful!");
                mgr
            }
        };

        Ok(Self {
            http,
            config,
            tokens: Mutex::new(token_mgr),
            matcher,
        })
    }

    async fn access_token(&self) -> Result<String> {
        let mut token_mgr = self.tokens.lock().await;
        token_mgr.get_valid_token(&self.http, &self.config).await
    }
}

impl<M: MatchStrategy> Catalog for SpotifyCatalog<M> {
    async fn search_album(&self, artist: &str, album: &str) -> Result<SearchOutcome> {
        let token = self.access_token().await?;
        let query = utils::album_query(artist, album);
        let candidates = albums::search_albums(&self.http, &self.config, &token, &query).await?;

        Ok(match self.matcher.select(artist, album, &candidates) {
            Some(found) => SearchOutcome::Found(CatalogAlbum::from(found)),
            None => SearchOutcome::NotFound,
        })
    }

    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>> {
        let token = self.access_token().await?;
        let tracks = albums::get_album_tracks(&self.http, &self.config, &token, album_id).await?;

        Ok(tracks
            .into_iter()
            .map(|t| t.id.unwrap_or_default())
            .collect())
    }

    async fn add_to_library(&self, album_id: &str) -> Result<()> {
        let token = self.access_token().await?;
        library::save_albums(&self.http, &self.config, &token, &[album_id.to_string()]).await
    }
}

/// Turns a non-success response into [`ImportError::RemoteService`].
///
/// Spotify's `{"error": {"message": ...}}` body is used for the message when
/// present, the raw body otherwise.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ImportError::RemoteService(error_message(status, &body)))
}

pub fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<SpotifyErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if message.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, message)
    }
}
