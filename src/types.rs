use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// State shared between the authorization flow and the callback handler.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub state: String,
    pub code: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyErrorResponse {
    pub error: SpotifyErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub albums: Option<Page<SimplifiedAlbum>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: String,
    pub name: String,
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedTrack {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveAlbumsRequest {
    pub ids: Vec<String>,
}

/// An album as the catalog names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogAlbum {
    pub id: String,
    pub name: String,
    pub artist: String,
}

impl From<&SimplifiedAlbum> for CatalogAlbum {
    fn from(album: &SimplifiedAlbum) -> Self {
        Self {
            id: album.id.clone(),
            name: album.name.clone(),
            artist: album
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(CatalogAlbum),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    DryRun,
    Live,
}

impl ImportMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            ImportMode::DryRun
        } else {
            ImportMode::Live
        }
    }

    pub fn is_dry_run(&self) -> bool {
        *self == ImportMode::DryRun
    }

    /// Tag used in log file names.
    pub fn tag(&self) -> &'static str {
        match self {
            ImportMode::DryRun => "dry_run",
            ImportMode::Live => "live",
        }
    }

    /// The tag with its first letter upper-cased, e.g. `Dry_run`.
    pub fn label(&self) -> String {
        let tag = self.tag();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumStatus {
    Success,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlbumAction {
    #[serde(rename = "Added")]
    Added,
    #[serde(rename = "Would add")]
    WouldAdd,
    #[serde(rename = "Not found")]
    NotFound,
}

/// One row of the import log. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumResult {
    pub status: AlbumStatus,
    pub action: AlbumAction,
    pub artist: String,
    pub album: String,
    pub track_count: usize,
    pub spotify_id: String,
}

impl AlbumResult {
    /// A matched album, recorded under the catalog's artist and album names.
    pub fn matched(album: CatalogAlbum, track_count: usize, action: AlbumAction) -> Self {
        Self {
            status: AlbumStatus::Success,
            action,
            artist: album.artist,
            album: album.name,
            track_count,
            spotify_id: album.id,
        }
    }

    /// An unmatched album, recorded under the folder names.
    pub fn not_found(artist: &str, album: &str) -> Self {
        Self {
            status: AlbumStatus::NotFound,
            action: AlbumAction::NotFound,
            artist: artist.to_string(),
            album: album.to_string(),
            track_count: 0,
            spotify_id: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AlbumStatus::Success
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub processed: usize,
    pub matched: usize,
    pub not_found: usize,
}

impl RunTotals {
    pub fn record(&mut self, result: &AlbumResult) {
        self.processed += 1;
        if result.is_success() {
            self.matched += 1;
        } else {
            self.not_found += 1;
        }
    }
}

/// An album folder found two levels below the music root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumFolder {
    pub artist: String,
    pub album: String,
}
