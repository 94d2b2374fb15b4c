use std::path::{Path, PathBuf};

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::SpotifyConfig,
    error,
    importer::{ImportLog, Importer},
    info,
    spotify::SpotifyCatalog,
    success,
    types::ImportMode,
    warning,
};

pub async fn import(music_dir: PathBuf, dry_run: bool) {
    let started_at = Local::now().naive_local();
    let mode = ImportMode::from_dry_run(dry_run);

    let config = match SpotifyConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("Error: {}", e),
    };

    if !music_dir.is_dir() {
        error!("Error: {} is not a directory", music_dir.display());
    }

    let catalog = match SpotifyCatalog::connect(config).await {
        Ok(catalog) => catalog,
        Err(e) => error!("Error: {}", e),
    };

    info!("{} mode: Processing music directory...", mode.label());

    let log = match ImportLog::create(Path::new("."), mode, started_at) {
        Ok(log) => log,
        Err(e) => error!("Cannot create log file: {}", e),
    };
    let log_name = display_name(log.path());

    let pb = progress_bar();
    let outcome = Importer::new(&catalog, mode)
        .run(&music_dir, log, |processed, total| {
            pb.set_length(total as u64);
            pb.set_position(processed as u64);
        })
        .await;
    pb.finish();

    match outcome {
        Ok(summary) => {
            success!("Log saved to {}", log_name);
            info!(
                "Summary: {} albums matched, {} albums not found",
                summary.totals.matched, summary.totals.not_found
            );
        }
        Err(e) => {
            warning!("Partial results saved to {}", log_name);
            error!("Import aborted: {}", e);
        }
    }
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template("Processed {pos}/{len} albums")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
