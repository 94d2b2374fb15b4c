//! Spotify library importer
//!
//! This library matches a local music collection, organised as
//! `artist/album` folders, against the Spotify catalog and saves the matched
//! albums to the user's library. Every album produces one row in a CSV log.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - The import command and its terminal output
//! - `config` - Credentials from the environment and fixed Spotify settings
//! - `error` - Error type shared by all stages
//! - `importer` - Album processing, run orchestration and the CSV log
//! - `management` - Token cache and refresh
//! - `scanner` - Enumeration of album folders
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotify_import::{config, spotify::SpotifyCatalog};
//!
//! #[tokio::main]
//! async fn main() -> spotify_import::error::Result<()> {
//!     let config = config::SpotifyConfig::from_env()?;
//!     let catalog = SpotifyCatalog::connect(config).await?;
//!     // Drive an importer::Importer with the catalog...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod importer;
pub mod management;
pub mod scanner;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Live mode: Processing music directory...");
/// info!("Summary: {} albums matched", matched);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits with status 1.
///
/// Only for failures the run cannot continue from, such as missing credentials
/// or an aborted import. Code after the macro does not execute, so it can be
/// used as the value of a `match` arm.
///
/// # Example
///
/// ```
/// let config = match SpotifyConfig::from_env() {
///     Ok(config) => config,
///     Err(e) => error!("Error: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For problems the run survives, like an unreadable `.env` file or a token
/// that could not be cached.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
