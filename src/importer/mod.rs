//! The import pipeline: scan folders, match each album, log the outcome.
//!
//! - [`process_album`] - one folder against the catalog
//! - [`Importer`] - the whole tree, with progress reporting and totals
//! - [`ImportLog`] - the CSV file every result is streamed into

mod log;
mod processor;
mod run;

pub use log::{ImportLog, LOG_COLUMNS};
pub use processor::process_album;
pub use run::{Importer, RunSummary};
