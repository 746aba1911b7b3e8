//! Business logic services for the application layer.

pub mod access_log_service;
pub mod analytics_service;
pub mod url_service;

pub use access_log_service::{AccessLogReport, AccessLogService};
pub use analytics_service::AnalyticsService;
pub use url_service::{CreateUrl, UrlService};
