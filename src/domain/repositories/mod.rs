//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL CRUD and redirect bookkeeping
//! - [`AccessLogRepository`] - Paginated access log reads
//! - [`AnalyticsRepository`] - Click rankings

pub mod access_log_repository;
pub mod analytics_repository;
pub mod url_repository;

pub use access_log_repository::AccessLogRepository;
pub use analytics_repository::{AnalyticsRepository, DateRange, TopUrl};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use access_log_repository::MockAccessLogRepository;
#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
