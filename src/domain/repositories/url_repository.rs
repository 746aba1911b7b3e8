//! Repository trait for shortened URL records.

use crate::domain::entities::{NewAccessLog, NewUrl, Url};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing shortened URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new URL with zero clicks, active, created now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError>;

    /// Finds a URL by its database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Url>, AppError>;

    /// Finds a URL by its short code.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Url>, AppError>;

    /// Returns whether any URL already uses `short_code`.
    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError>;

    /// Lists URLs newest first.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Url>, AppError>;

    /// Counts all stored URLs.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces the target of a URL.
    ///
    /// Returns `Ok(None)` if no URL has this ID.
    async fn update_long_url(&self, id: i64, long_url: &str) -> Result<Option<Url>, AppError>;

    /// Sets the active flag of a URL.
    ///
    /// Returns `Ok(None)` if no URL has this ID.
    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<Url>, AppError>;

    /// Stores the public path of the URL's QR image.
    ///
    /// Returns `Ok(false)` if no URL has this ID.
    async fn set_qr_code_path(&self, id: i64, qr_code_path: &str) -> Result<bool, AppError>;

    /// Permanently deletes a URL together with its access logs.
    ///
    /// Returns `Ok(false)` if no URL has this ID.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Records one redirect attempt as a single unit of work.
    ///
    /// Increments `clicks` atomically, sets `last_accessed_at` to now and appends
    /// an access log row. Returns the updated URL, or `Ok(None)` if the short code
    /// is unknown (nothing is written in that case).
    async fn record_access(
        &self,
        short_code: &str,
        access: NewAccessLog,
    ) -> Result<Option<Url>, AppError>;
}
