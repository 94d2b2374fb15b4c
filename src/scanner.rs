//! Enumerates album folders in an `artist/album` tree.
//!
//! Only directories two levels below the root count. Files at either level,
//! symlinks to files and dangling symlinks are skipped. Symlinks to
//! directories are followed, including an artist folder that links back to
//! the root or one of its ancestors: its child directories are listed once
//! and become that artist's albums. Entries come out in whatever order the
//! file system lists them.

use std::{fs, io, path::Path, vec};

use walkdir::WalkDir;

use crate::{error::Result, types::AlbumFolder};

/// Lazy sequence of the album folders below a root. Every call to
/// [`album_folders`] starts a fresh walk.
pub struct AlbumFolders {
    walker: walkdir::IntoIter,
    looped: vec::IntoIter<AlbumFolder>,
}

/// Starts walking `root` for album folders.
pub fn album_folders(root: &Path) -> AlbumFolders {
    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .follow_links(true)
        .into_iter();

    AlbumFolders {
        walker,
        looped: Vec::new().into_iter(),
    }
}

/// Counts the album folders below `root` without yielding them.
pub fn count_album_folders(root: &Path) -> Result<usize> {
    album_folders(root).try_fold(0, |count, folder| folder.map(|_| count + 1))
}

impl Iterator for AlbumFolders {
    type Item = Result<AlbumFolder>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(folder) = self.looped.next() {
                return Some(Ok(folder));
            }

            match self.walker.next()? {
                Ok(entry) if entry.file_type().is_dir() => {
                    return Some(Ok(folder_from_path(entry.path())));
                }
                Ok(_) => continue,
                Err(err) => {
                    // A link back to an ancestor is still a directory.
                    if let (Some(_), Some(path)) = (err.loop_ancestor(), err.path()) {
                        match err.depth() {
                            2 => return Some(Ok(folder_from_path(path))),
                            1 => match looped_albums(path) {
                                Ok(folders) => {
                                    self.looped = folders.into_iter();
                                    continue;
                                }
                                Err(e) => return Some(Err(e)),
                            },
                            _ => {}
                        }
                    }
                    if is_dangling(&err) {
                        continue;
                    }
                    return Some(Err(err.into()));
                }
            }
        }
    }
}

/// Album folders of an artist folder that walkdir refuses to descend into
/// because it links back to an ancestor.
fn looped_albums(artist_dir: &Path) -> Result<Vec<AlbumFolder>> {
    let artist = file_name(artist_dir);
    let mut folders = Vec::new();

    for entry in fs::read_dir(artist_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            folders.push(AlbumFolder {
                artist: artist.clone(),
                album: file_name(&path),
            });
        }
    }

    Ok(folders)
}

fn is_dangling(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn folder_from_path(path: &Path) -> AlbumFolder {
    let album = file_name(path);
    let artist = path.parent().map(file_name).unwrap_or_default();
    AlbumFolder { artist, album }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
