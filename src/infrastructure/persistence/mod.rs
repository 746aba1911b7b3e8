//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Url storage and the redirect transaction
//! - [`PgAccessLogRepository`] - Access log reads
//! - [`PgAnalyticsRepository`] - Top-URL aggregation queries

pub mod pg_access_log_repository;
pub mod pg_analytics_repository;
pub mod pg_url_repository;

pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_analytics_repository::PgAnalyticsRepository;
pub use pg_url_repository::PgUrlRepository;
