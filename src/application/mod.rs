//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL lifecycle and redirects
//! - [`services::access_log_service::AccessLogService`] - Paginated access history
//! - [`services::analytics_service::AnalyticsService`] - Top-URL rankings

pub mod services;
