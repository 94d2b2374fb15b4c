use std::fs::{self, File};
use std::path::Path;

use spotify_import::scanner::{album_folders, count_album_folders};
use spotify_import::types::AlbumFolder;
use tempfile::tempdir;

fn mkdir(root: &Path, rel: &str) {
    fs::create_dir_all(root.join(rel)).unwrap();
}

fn collect_sorted(root: &Path) -> Vec<(String, String)> {
    let mut folders: Vec<(String, String)> = album_folders(root)
        .map(|f| f.unwrap())
        .map(|AlbumFolder { artist, album }| (artist, album))
        .collect();
    folders.sort();
    folders
}

fn pair(artist: &str, album: &str) -> (String, String) {
    (artist.to_string(), album.to_string())
}

#[test]
fn test_empty_root() {
    let dir = tempdir().unwrap();

    assert_eq!(count_album_folders(dir.path()).unwrap(), 0);
    assert!(collect_sorted(dir.path()).is_empty());
}

#[test]
fn test_two_level_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    mkdir(root, "Portishead/Dummy");
    mkdir(root, "Portishead/Third");
    mkdir(root, "Massive Attack/Mezzanine");
    mkdir(root, "Empty Artist");

    assert_eq!(count_album_folders(root).unwrap(), 3);
    assert_eq!(
        collect_sorted(root),
        vec![
            pair("Massive Attack", "Mezzanine"),
            pair("Portishead", "Dummy"),
            pair("Portishead", "Third"),
        ]
    );
}

#[test]
fn test_files_are_skipped_at_both_levels() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    mkdir(root, "Portishead/Dummy");
    File::create(root.join("notes.txt")).unwrap();
    File::create(root.join("Portishead/cover.jpg")).unwrap();
    File::create(root.join("Portishead/Dummy/01 Mysterons.flac")).unwrap();

    assert_eq!(count_album_folders(root).unwrap(), 1);
    assert_eq!(collect_sorted(root), vec![pair("Portishead", "Dummy")]);
}

#[test]
fn test_deeper_folders_are_not_albums() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    mkdir(root, "Artist/Album/CD1");
    mkdir(root, "Artist/Album/CD2");

    assert_eq!(collect_sorted(root), vec![pair("Artist", "Album")]);
}

#[test]
fn test_walk_can_be_restarted() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    mkdir(root, "A/One");
    mkdir(root, "B/Two");

    assert_eq!(collect_sorted(root), collect_sorted(root));
    assert_eq!(album_folders(root).count(), 2);
    assert_eq!(album_folders(root).count(), 2);
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(count_album_folders(&missing).is_err());
}

#[cfg(unix)]
#[test]
fn test_symlinks() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let root = dir.path().join("music");
    let elsewhere = dir.path().join("elsewhere");
    mkdir(&root, "Artist/Real");
    mkdir(&elsewhere, "Linked Album");
    File::create(elsewhere.join("file.txt")).unwrap();

    symlink(elsewhere.join("Linked Album"), root.join("Artist/Linked")).unwrap();
    symlink(elsewhere.join("file.txt"), root.join("Artist/NotAnAlbum")).unwrap();
    symlink(elsewhere.join("gone"), root.join("Artist/Dangling")).unwrap();

    assert_eq!(count_album_folders(&root).unwrap(), 2);
    assert_eq!(
        collect_sorted(&root),
        vec![pair("Artist", "Linked"), pair("Artist", "Real")]
    );
}

#[cfg(unix)]
#[test]
fn test_artist_link_back_to_root_lists_its_albums() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let root = dir.path().join("music");
    mkdir(&root, "Artist/Album");
    symlink(&root, root.join("Compilations")).unwrap();

    assert_eq!(count_album_folders(&root).unwrap(), 3);
    assert_eq!(
        collect_sorted(&root),
        vec![
            pair("Artist", "Album"),
            pair("Compilations", "Artist"),
            pair("Compilations", "Compilations"),
        ]
    );
}
