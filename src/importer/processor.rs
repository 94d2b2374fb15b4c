use crate::{
    error::Result,
    spotify::Catalog,
    types::{AlbumAction, AlbumResult, ImportMode, SearchOutcome},
};

/// Matches one album folder against the catalog.
///
/// On a hit the track listing is fetched for its count and, unless this is
/// a dry run, the album is saved to the library. The row then carries the
/// catalog's artist and album names. On a miss it carries the folder names.
///
/// Remote failures are returned as-is; nothing is retried.
pub async fn process_album<C: Catalog>(
    catalog: &C,
    artist: &str,
    album: &str,
    mode: ImportMode,
) -> Result<AlbumResult> {
    let found = match catalog.search_album(artist, album).await? {
        SearchOutcome::Found(found) => found,
        SearchOutcome::NotFound => return Ok(AlbumResult::not_found(artist, album)),
    };

    let track_count = catalog.list_tracks(&found.id).await?.len();

    let action = if mode.is_dry_run() {
        AlbumAction::WouldAdd
    } else {
        catalog.add_to_library(&found.id).await?;
        AlbumAction::Added
    };

    Ok(AlbumResult::matched(found, track_count, action))
}
