use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    importer::{log::ImportLog, processor},
    scanner,
    spotify::Catalog,
    types::{ImportMode, RunTotals},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub totals: RunTotals,
    pub log_path: PathBuf,
}

/// Drives one import run over a music directory.
pub struct Importer<'a, C> {
    catalog: &'a C,
    mode: ImportMode,
}

impl<'a, C: Catalog> Importer<'a, C> {
    pub fn new(catalog: &'a C, mode: ImportMode) -> Self {
        Self { catalog, mode }
    }

    /// Processes every album folder below `root`, streaming each result into
    /// `log` and calling `on_progress(processed, total)` after every album.
    ///
    /// The log is closed on every exit path. When a remote call fails the
    /// rows written so far stay on disk and the error is returned.
    pub async fn run<F>(
        &self,
        root: &Path,
        mut log: ImportLog,
        mut on_progress: F,
    ) -> Result<RunSummary>
    where
        F: FnMut(usize, usize),
    {
        let outcome = self.process_tree(root, &mut log, &mut on_progress).await;
        let closed = log.close();

        let totals = outcome?;
        let log_path = closed?;
        Ok(RunSummary { totals, log_path })
    }

    async fn process_tree<F>(
        &self,
        root: &Path,
        log: &mut ImportLog,
        on_progress: &mut F,
    ) -> Result<RunTotals>
    where
        F: FnMut(usize, usize),
    {
        let total = scanner::count_album_folders(root)?;
        let mut totals = RunTotals::default();

        for folder in scanner::album_folders(root) {
            let folder = folder?;
            let result =
                processor::process_album(self.catalog, &folder.artist, &folder.album, self.mode)
                    .await?;

            log.write(&result)?;
            totals.record(&result);
            on_progress(totals.processed, total);
        }

        Ok(totals)
    }
}
