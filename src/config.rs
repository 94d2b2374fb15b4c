//! Configuration management for the Spotify importer.
//!
//! This module loads credentials from environment variables and `.env` files and
//! bundles them, together with the compiled-in Spotify endpoints, into a single
//! immutable [`SpotifyConfig`] value that is built once at startup and handed to
//! the catalog client.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory

use std::{env, path::PathBuf, time::Duration};

use crate::error::{ImportError, Result};

/// Environment variable holding the Spotify client id.
pub const CLIENT_ID_VAR: &str = "SPOTIPY_CLIENT_ID";
/// Environment variable holding the Spotify client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIPY_CLIENT_SECRET";

pub const REDIRECT_URI: &str = "http://localhost:8000/callback";
pub const CALLBACK_ADDR: &str = "127.0.0.1:8000";
pub const SCOPE: &str = "user-library-modify";
pub const API_URL: &str = "https://api.spotify.com/v1";
pub const AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

const MISSING_CREDENTIALS: &str =
    "Spotify API credentials are missing. Please check your .env file.";

/// Loads environment variables from `.env` files.
///
/// The file in the current working directory is read first, then the one in
/// the platform-specific local data directory under `spotify-import/.env`:
/// - Linux: `~/.local/share/spotify-import/.env`
/// - macOS: `~/Library/Application Support/spotify-import/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-import/.env`
///
/// Variables that are already set are never overridden, so the real process
/// environment always wins. Missing files are ignored.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or a file
/// exists but cannot be parsed.
pub async fn load_env() -> std::result::Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

/// Location of the per-user `.env` file.
pub fn env_path() -> PathBuf {
    data_dir().join(".env")
}

/// Root of everything the importer keeps between runs (token cache, `.env`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-import");
    path
}

/// Immutable settings for talking to Spotify.
///
/// Only the client id and secret come from the environment. Everything else
/// is fixed at compile time.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub callback_addr: String,
    pub scope: String,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub auth_timeout: Duration,
}

impl SpotifyConfig {
    /// Builds the configuration from explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Configuration`] if either value is absent or
    /// blank.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
        let client_id = non_blank(client_id)
            .ok_or_else(|| ImportError::Configuration(MISSING_CREDENTIALS.to_string()))?;
        let client_secret = non_blank(client_secret)
            .ok_or_else(|| ImportError::Configuration(MISSING_CREDENTIALS.to_string()))?;

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri: REDIRECT_URI.to_string(),
            callback_addr: CALLBACK_ADDR.to_string(),
            scope: SCOPE.to_string(),
            api_url: API_URL.to_string(),
            auth_url: AUTH_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            auth_timeout: AUTH_TIMEOUT,
        })
    }

    /// Reads `SPOTIPY_CLIENT_ID` and `SPOTIPY_CLIENT_SECRET` from the process
    /// environment. Call [`load_env`] first to pick up `.env` files.
    pub fn from_env() -> Result<Self> {
        Self::new(env::var(CLIENT_ID_VAR).ok(), env::var(CLIENT_SECRET_VAR).ok())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
