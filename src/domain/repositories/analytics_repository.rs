//! Repository trait for click rankings.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A URL together with the click count it was ranked by.
///
/// Depending on the query, `clicks` is either the lifetime counter stored on
/// the URL or the number of access logs inside a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct TopUrl {
    pub url_id: i64,
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

/// Optional inclusive bounds on `accessed_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Whether `at` falls inside the range. Missing bounds are open.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }
}

/// Repository interface for aggregate click rankings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnalyticsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// URLs ordered by lifetime `clicks` descending, ties by ID ascending.
    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<TopUrl>, AppError>;

    /// URLs ordered by the number of access logs inside `range`, descending,
    /// ties by URL ID ascending. URLs without matching logs are omitted.
    async fn top_by_access_range(
        &self,
        range: DateRange,
        limit: i64,
    ) -> Result<Vec<TopUrl>, AppError>;
}
