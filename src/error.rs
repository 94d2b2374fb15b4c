//! Error types shared by every stage of an import run.
//!
//! Configuration problems are detected before anything touches the disk or the
//! network. Remote failures (`RemoteService`, `Transport`) are never retried:
//! they travel up through the processor and the orchestrator and end the run.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Missing credentials or an unusable music directory.
    #[error("{0}")]
    Configuration(String),

    /// Spotify answered with a non-success status, or authorization failed.
    #[error("Spotify request failed: {0}")]
    RemoteService(String),

    /// The request never produced a usable response.
    #[error("Spotify request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot read music directory: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImportError {
    /// True for failures that originate at the catalog service.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImportError::RemoteService(_) | ImportError::Transport(_))
    }
}
