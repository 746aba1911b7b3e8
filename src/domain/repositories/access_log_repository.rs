//! Repository trait for per-URL access logs.

use crate::domain::entities::AccessLog;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read access to the access logs of a single URL.
///
/// Logs are written by [`super::UrlRepository::record_access`]; this trait only reads.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccessLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Counts all logs recorded for `url_id`.
    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError>;

    /// Lists logs for `url_id`, most recent first.
    async fn list_by_url(
        &self,
        url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AccessLog>, AppError>;

    /// Earliest `accessed_at` across every log of `url_id`, if any.
    async fn first_access(&self, url_id: i64) -> Result<Option<DateTime<Utc>>, AppError>;
}
