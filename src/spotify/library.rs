use reqwest::Client;

use crate::{
    config::SpotifyConfig, error::Result, spotify::check_status, types::SaveAlbumsRequest,
};

/// Saves albums to the current user's "Your Music" library.
///
/// Requires the `user-library-modify` scope. Spotify ignores albums that are
/// already saved, so repeating the call is harmless.
///
/// # API Endpoint
///
/// `PUT /me/albums` with body `{"ids": [...]}`
pub async fn save_albums(
    http: &Client,
    config: &SpotifyConfig,
    token: &str,
    album_ids: &[String],
) -> Result<()> {
    let api_url = format!("{uri}/me/albums", uri = config.api_url);
    let body = SaveAlbumsRequest {
        ids: album_ids.to_vec(),
    };

    let response = http
        .put(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    check_status(response).await?;
    Ok(())
}
