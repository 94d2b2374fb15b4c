//! # CLI Module
//!
//! The user-facing side of an import run. It wires configuration, the Spotify
//! catalog and the import pipeline together and owns everything that is
//! printed to the terminal.
//!
//! ## Flow
//!
//! 1. **Credentials**: read from the environment; missing values abort before
//!    any file is created
//! 2. **Authorization**: reuse the cached token or run the browser flow
//! 3. **Import**: walk the music directory, streaming one log row per album
//! 4. **Feedback**: an in-place `Processed X/Y albums` line, then the log file
//!    name and the matched/not-found summary
//!
//! ## Usage
//!
//! ```bash
//! spotify-import ~/Music --dry-run   # look everything up, change nothing
//! spotify-import ~/Music             # save matched albums to your library
//! ```
//!
//! A failing Spotify call stops the run. The rows logged up to that point are
//! kept and the file name is printed before exiting.

mod import;

pub use import::import;
