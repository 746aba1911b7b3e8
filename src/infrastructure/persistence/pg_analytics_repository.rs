//! PostgreSQL implementation of analytics queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{AnalyticsRepository, DateRange, TopUrl};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TopUrlRow {
    url_id: i64,
    short_code: String,
    long_url: String,
    clicks: i64,
    last_accessed_at: Option<DateTime<Utc>>,
}

impl From<TopUrlRow> for TopUrl {
    fn from(r: TopUrlRow) -> Self {
        TopUrl {
            url_id: r.url_id,
            short_code: r.short_code,
            long_url: r.long_url,
            clicks: r.clicks,
            last_accessed_at: r.last_accessed_at,
        }
    }
}

/// Aggregation queries over `urls` and `url_access_logs`.
pub struct PgAnalyticsRepository {
    pool: Arc<PgPool>,
}

impl PgAnalyticsRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<TopUrl>, AppError> {
        let rows: Vec<TopUrlRow> = sqlx::query_as(
            r#"
            SELECT id AS url_id, short_code, long_url, clicks, last_accessed_at
            FROM urls
            ORDER BY clicks DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TopUrl::from).collect())
    }

    /// `clicks` in the result is the number of logs inside the range, not the
    /// persistent counter.
    async fn top_by_access_range(
        &self,
        range: DateRange,
        limit: i64,
    ) -> Result<Vec<TopUrl>, AppError> {
        let rows: Vec<TopUrlRow> = sqlx::query_as(
            r#"
            SELECT u.id AS url_id, u.short_code, u.long_url,
                   g.hits AS clicks, u.last_accessed_at
            FROM (
                SELECT url_id, COUNT(*) AS hits
                FROM url_access_logs
                WHERE ($1::timestamptz IS NULL OR accessed_at >= $1)
                  AND ($2::timestamptz IS NULL OR accessed_at <= $2)
                GROUP BY url_id
            ) g
            JOIN urls u ON u.id = g.url_id
            ORDER BY g.hits DESC, g.url_id ASC
            LIMIT $3
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TopUrl::from).collect())
    }
}
