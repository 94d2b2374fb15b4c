use reqwest::Client;

use crate::{
    config::SpotifyConfig,
    error::Result,
    spotify::check_status,
    types::{Page, SearchResponse, SimplifiedAlbum, SimplifiedTrack},
};

/// Size of the single search page that is requested.
pub const SEARCH_LIMIT: u32 = 10;
/// Size of the single track page that is requested.
pub const TRACKS_LIMIT: u32 = 50;

/// Searches the catalog for albums matching a structured query.
///
/// Only the first page is fetched; the candidates are returned in the order
/// Spotify ranked them. An empty result is not an error.
///
/// # Arguments
///
/// * `query` - Search expression such as `artist:Portishead album:Dummy`
///
/// # API Endpoint
///
/// `GET /search?q={query}&type=album&limit=10`
pub async fn search_albums(
    http: &Client,
    config: &SpotifyConfig,
    token: &str,
    query: &str,
) -> Result<Vec<SimplifiedAlbum>> {
    let api_url = format!("{uri}/search", uri = config.api_url);
    let limit = SEARCH_LIMIT.to_string();

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("q", query), ("type", "album"), ("limit", limit.as_str())])
        .send()
        .await?;

    let json: SearchResponse = check_status(response).await?.json().await?;

    Ok(json.albums.map(|page| page.items).unwrap_or_default())
}

/// Retrieves the first page of an album's tracks.
///
/// Albums longer than [`TRACKS_LIMIT`] tracks are not paginated further.
pub async fn get_album_tracks(
    http: &Client,
    config: &SpotifyConfig,
    token: &str,
    album_id: &str,
) -> Result<Vec<SimplifiedTrack>> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit={limit}&offset=0",
        uri = config.api_url,
        id = album_id,
        limit = TRACKS_LIMIT
    );

    let response = http.get(&api_url).bearer_auth(token).send().await?;
    let json: Page<SimplifiedTrack> = check_status(response).await?.json().await?;

    Ok(json.items)
}
