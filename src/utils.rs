use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDateTime;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::ImportMode;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Opaque value echoed back by the authorization server.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

/// Structured search filter for one album.
pub fn album_query(artist: &str, album: &str) -> String {
    format!("artist:{} album:{}", artist, album)
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Name of the log file for a run.
///
/// `attempt` 0 gives the plain name; higher values add a suffix so an
/// existing log from the same second is never overwritten.
pub fn log_file_name(mode: ImportMode, at: NaiveDateTime, attempt: u32) -> String {
    let timestamp = format_timestamp(at);
    if attempt == 0 {
        format!("spotify_import_log_{}_{}.csv", mode.tag(), timestamp)
    } else {
        format!(
            "spotify_import_log_{}_{}_{}.csv",
            mode.tag(),
            timestamp,
            attempt
        )
    }
}
