//! PostgreSQL implementation of the Url repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewAccessLog, NewUrl, Url};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    long_url: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    last_accessed_at: Option<DateTime<Utc>>,
    clicks: i64,
    qr_code_path: Option<String>,
}

impl From<UrlRow> for Url {
    fn from(r: UrlRow) -> Self {
        Url {
            id: r.id,
            short_code: r.short_code,
            long_url: r.long_url,
            is_active: r.is_active,
            created_at: r.created_at,
            expires_at: r.expires_at,
            last_accessed_at: r.last_accessed_at,
            clicks: r.clicks,
            qr_code_path: r.qr_code_path,
        }
    }
}

/// PostgreSQL repository for Url storage.
///
/// Queries are bound at runtime, so building the crate does not need a live
/// database.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError> {
        let row: UrlRow = sqlx::query_as(
            r#"
            INSERT INTO urls (short_code, long_url, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, short_code, long_url, is_active, created_at, expires_at,
                      last_accessed_at, clicks, qr_code_path
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.long_url)
        .bind(new_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Url>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, long_url, is_active, created_at, expires_at,
                   last_accessed_at, clicks, qr_code_path
            FROM urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Url>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, long_url, is_active, created_at, expires_at,
                   last_accessed_at, clicks, qr_code_path
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)")
                .bind(short_code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Url>, AppError> {
        let rows: Vec<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, long_url, is_active, created_at, expires_at,
                   last_accessed_at, clicks, qr_code_path
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Url::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update_long_url(&self, id: i64, long_url: &str) -> Result<Option<Url>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            UPDATE urls SET long_url = $2
            WHERE id = $1
            RETURNING id, short_code, long_url, is_active, created_at, expires_at,
                      last_accessed_at, clicks, qr_code_path
            "#,
        )
        .bind(id)
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<Url>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            UPDATE urls SET is_active = $2
            WHERE id = $1
            RETURNING id, short_code, long_url, is_active, created_at, expires_at,
                      last_accessed_at, clicks, qr_code_path
            "#,
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn set_qr_code_path(&self, id: i64, qr_code_path: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET qr_code_path = $2 WHERE id = $1")
            .bind(id)
            .bind(qr_code_path)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_access(
        &self,
        short_code: &str,
        access: NewAccessLog,
    ) -> Result<Option<Url>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            UPDATE urls
            SET clicks = clicks + 1, last_accessed_at = NOW()
            WHERE short_code = $1
            RETURNING id, short_code, long_url, is_active, created_at, expires_at,
                      last_accessed_at, clicks, qr_code_path
            "#,
        )
        .bind(short_code)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            r#"
            INSERT INTO url_access_logs (url_id, accessed_at, ip_address, user_agent)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(row.id)
        .bind(row.last_accessed_at)
        .bind(&access.ip_address)
        .bind(&access.user_agent)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into()))
    }
}
