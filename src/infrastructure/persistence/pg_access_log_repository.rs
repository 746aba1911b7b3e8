//! PostgreSQL implementation of the access log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::AccessLog;
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AccessLogRow {
    id: i64,
    url_id: i64,
    accessed_at: DateTime<Utc>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl From<AccessLogRow> for AccessLog {
    fn from(r: AccessLogRow) -> Self {
        AccessLog {
            id: r.id,
            url_id: r.url_id,
            accessed_at: r.accessed_at,
            ip_address: r.ip_address,
            user_agent: r.user_agent,
        }
    }
}

/// PostgreSQL repository for reading access logs.
///
/// Logs are written by [`super::PgUrlRepository`] inside the redirect
/// transaction; this repository only reads them.
pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
}

impl PgAccessLogRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_access_logs WHERE url_id = $1")
            .bind(url_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_by_url(
        &self,
        url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AccessLog>, AppError> {
        let rows: Vec<AccessLogRow> = sqlx::query_as(
            r#"
            SELECT id, url_id, accessed_at, ip_address, user_agent
            FROM url_access_logs
            WHERE url_id = $1
            ORDER BY accessed_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(url_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AccessLog::from).collect())
    }

    async fn first_access(&self, url_id: i64) -> Result<Option<DateTime<Utc>>, AppError> {
        let first: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MIN(accessed_at) FROM url_access_logs WHERE url_id = $1")
                .bind(url_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(first)
    }
}
