//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names; request bodies are checked
//! with validator before reaching the services.

pub mod access_log;
pub mod analytics;
pub mod pagination;
pub mod shorten;
pub mod url;
