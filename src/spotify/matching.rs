use crate::types::SimplifiedAlbum;

/// Chooses which search candidate, if any, stands for a local album folder.
pub trait MatchStrategy {
    fn select<'a>(
        &self,
        artist: &str,
        album: &str,
        candidates: &'a [SimplifiedAlbum],
    ) -> Option<&'a SimplifiedAlbum>;
}

/// Takes whatever Spotify ranked first. No disambiguation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl MatchStrategy for FirstCandidate {
    fn select<'a>(
        &self,
        _artist: &str,
        _album: &str,
        candidates: &'a [SimplifiedAlbum],
    ) -> Option<&'a SimplifiedAlbum> {
        candidates.first()
    }
}
