/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Edu Client
//!
//! Client-side session and API layer for the Obrazovanie online education
//! platform.
//!
//! The crate owns the authentication token and the current-user record,
//! persists them through an injectable [`storage::SessionStore`], and exposes
//! the authenticated-request helper that every protected call (course
//! enrollment, payments, reviews) goes through. Public catalogue endpoints
//! (courses, search, reviews, stats, contact form, newsletter) are available
//! on the same [`application::client::Client`].
//!
//! ## Usage
//!
//! ```ignore
//! use edu_client::prelude::*;
//!
//! setup_logger();
//! let config = Config::new();
//! let client = Client::new(config)?;
//!
//! let user = client.session().login("a@b.com", "pw").await?;
//! client.enroll_course("rust-101").await?;
//! client.session().logout();
//! ```
//!
//! Errors are typed ([`error::AppError`]) and only collapse to a message at
//! the presentation boundary ([`presentation::result::ActionResult`]).

/// Session client, API client, configuration and navigation
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and the low-level HTTP helper
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Presentation-layer models and uniform action results
pub mod presentation;
/// Durable and in-memory session storage
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
