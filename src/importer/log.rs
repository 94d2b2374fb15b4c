use std::{
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use csv::{Terminator, Writer, WriterBuilder};

use crate::{
    error::Result,
    types::{AlbumResult, ImportMode},
    utils,
};

pub const LOG_COLUMNS: [&str; 6] = [
    "status",
    "action",
    "artist",
    "album",
    "track_count",
    "spotify_id",
];

/// Per-run CSV log with one row per processed album.
///
/// The header is written on creation, so a run that finds no albums still
/// leaves a valid file behind. Rows are flushed as they are written.
pub struct ImportLog {
    writer: Writer<File>,
    path: PathBuf,
}

impl ImportLog {
    /// Creates `spotify_import_log_<mode>_<timestamp>.csv` inside `dir`.
    pub fn create(dir: &Path, mode: ImportMode, started_at: NaiveDateTime) -> Result<Self> {
        let (file, path) = create_unique(dir, mode, started_at)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);
        writer.write_record(LOG_COLUMNS)?;
        writer.flush()?;

        Ok(Self { writer, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, result: &AlbumResult) -> Result<()> {
        self.writer.serialize(result)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and closes the file, returning where it lives.
    pub fn close(self) -> Result<PathBuf> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(self.path)
    }
}

fn create_unique(
    dir: &Path,
    mode: ImportMode,
    started_at: NaiveDateTime,
) -> Result<(File, PathBuf)> {
    let mut attempt = 0;
    loop {
        let path = dir.join(utils::log_file_name(mode, started_at, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
