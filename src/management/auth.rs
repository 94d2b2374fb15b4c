use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config::{self, SpotifyConfig},
    error::Result,
    spotify,
    types::Token,
};

/// Seconds before the nominal expiry at which a token is refreshed.
const EXPIRY_MARGIN: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token that is valid for at least a few minutes,
    /// refreshing and re-persisting it first when needed.
    pub async fn get_valid_token(
        &mut self,
        http: &Client,
        config: &SpotifyConfig,
    ) -> Result<String> {
        if self.is_expired_at(Utc::now().timestamp() as u64) {
            let refreshed = spotify::auth::refresh_token(http, config, &self.token).await?;
            self.token = refreshed;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let expires_at = self.token.obtained_at + self.token.expires_in;
        now >= expires_at.saturating_sub(EXPIRY_MARGIN)
    }

    /// Whether the token was granted every scope in `scope`.
    pub fn covers_scope(&self, scope: &str) -> bool {
        let granted: Vec<&str> = self.token.scope.split_whitespace().collect();
        scope.split_whitespace().all(|s| granted.contains(&s))
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}
