//! Top-URL analytics.

use std::sync::Arc;

use crate::domain::repositories::{AnalyticsRepository, DateRange, TopUrl};
use crate::error::AppError;

/// Number of entries returned by both rankings.
pub const TOP_LIMIT: i64 = 10;

/// Service for ranking Urls by popularity.
///
/// Two rankings are offered: by the persistent click counter, and by the
/// number of access logs inside a date range. They can disagree, since the
/// counter is never filtered by date.
pub struct AnalyticsService<R: AnalyticsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: AnalyticsRepository + ?Sized> AnalyticsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Top 10 Urls by click counter, ties broken by lowest id.
    pub async fn top_urls(&self) -> Result<Vec<TopUrl>, AppError> {
        let top = self.repository.top_by_clicks(TOP_LIMIT).await?;
        tracing::debug!(count = top.len(), "Top URLs computed");
        Ok(top)
    }

    /// Top 10 Urls by access count within `range` (inclusive bounds).
    ///
    /// Returns an empty list when no access falls in the range.
    pub async fn top_urls_by_date(&self, range: DateRange) -> Result<Vec<TopUrl>, AppError> {
        if let (Some(from), Some(to)) = (range.from, range.to)
            && from > to
        {
            tracing::debug!(%from, %to, "Empty date range");
            return Ok(Vec::new());
        }

        let top = self.repository.top_by_access_range(range, TOP_LIMIT).await?;
        tracing::debug!(
            from = ?range.from,
            to = ?range.to,
            count = top.len(),
            "Top URLs by date computed"
        );
        Ok(top)
    }
}
