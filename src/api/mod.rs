//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that receives the
//! OAuth redirect during authorization.
//!
//! ## Endpoints
//!
//! - [`callback`] - Captures the authorization code (or the denial) that
//!   Spotify's authorization page redirects to. The `state` parameter must
//!   match the one generated for the current session.
//! - [`health`] - Returns application status and version, handy for checking
//!   that the callback port is actually ours.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_import::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
