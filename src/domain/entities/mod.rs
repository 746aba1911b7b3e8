//! Core domain entities.
//!
//! - [`Url`] - A shortened URL record with counters and lifecycle flags
//! - [`AccessLog`] - A single redirect attempt against a Url
//!
//! Creation inputs live next to their entity (`NewUrl`, `NewAccessLog`).

pub mod access_log;
pub mod url;

pub use access_log::{AccessLog, NewAccessLog};
pub use url::{NewUrl, Url, UrlStatus, short_url};
