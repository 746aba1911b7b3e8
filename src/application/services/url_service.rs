//! Url lifecycle service: creation, lookup, mutation and redirect resolution.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewAccessLog, NewUrl, Url, UrlStatus, short_url};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::qr_code::QrCodeGenerator;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::sanitizer::{sanitize_alias, sanitize_url};
use crate::utils::url_validator::{UrlValidationError, parse_http_url};

const MAX_CODE_ATTEMPTS: usize = 10;

/// Input for [`UrlService::create`].
#[derive(Debug, Clone, Default)]
pub struct CreateUrl {
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub custom_alias: Option<String>,
}

/// Service for creating, resolving and managing shortened URLs.
///
/// Generic over the repository and QR generator so unit tests can inject
/// mocks while the server wires in trait objects.
pub struct UrlService<U: UrlRepository + ?Sized, Q: QrCodeGenerator + ?Sized> {
    url_repository: Arc<U>,
    qr_generator: Arc<Q>,
}

impl<U: UrlRepository + ?Sized, Q: QrCodeGenerator + ?Sized> UrlService<U, Q> {
    pub fn new(url_repository: Arc<U>, qr_generator: Arc<Q>) -> Self {
        Self {
            url_repository,
            qr_generator,
        }
    }

    /// Creates a short URL.
    ///
    /// `origin` is the `{scheme}://{host}` the request was addressed to and is
    /// used both for the returned short URL and for the QR image content.
    ///
    /// # Code selection
    ///
    /// - With a non-empty `custom_alias`, the sanitized alias is used as-is
    /// - Otherwise a random 6-character hex code is generated, retrying up to
    ///   10 times on collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `long_url` is empty
    /// - `long_url` is not an absolute http/https URL
    /// - The alias sanitizes to nothing or names a reserved route
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    ///
    /// The QR image is rendered only after the row is stored, so a failed
    /// insert leaves nothing on disk.
    pub async fn create(&self, origin: &str, input: CreateUrl) -> Result<Url, AppError> {
        tracing::info!(long_url = %input.long_url, "Shorten request received");

        let parsed = parse_http_url(&input.long_url).map_err(|e| match e {
            UrlValidationError::Empty => {
                tracing::warn!("Rejected empty URL");
                AppError::bad_request("URL cannot be empty", json!({}))
            }
            other => {
                tracing::warn!(long_url = %input.long_url, reason = %other, "Rejected invalid URL");
                AppError::bad_request(
                    "Invalid URL. It must start with http:// or https://",
                    json!({ "reason": other.to_string() }),
                )
            }
        })?;
        let long_url = sanitize_url(parsed.as_str());

        let short_code = match input.custom_alias.as_deref().filter(|a| !a.is_empty()) {
            Some(raw_alias) => self.claim_alias(raw_alias).await?,
            None => self.generate_unique_code().await?,
        };

        let url = self
            .url_repository
            .create(NewUrl {
                short_code,
                long_url,
                expires_at: input.expires_at,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Alias is already in use. Choose another one.",
                    json!({}),
                ),
                other => other,
            })?;
        let url = self.attach_qr_code(url, origin).await;

        tracing::info!(
            id = url.id,
            short_code = %url.short_code,
            long_url = %url.long_url,
            "Short URL created"
        );

        Ok(url)
    }

    /// Resolves a short code to its target, recording the access first.
    ///
    /// The click counter, `last_accessed_at` and the access log are written
    /// even when the link turns out to be expired or inactive.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown
    /// - [`AppError::Expired`] if the link is past its expiry
    /// - [`AppError::Inactive`] if the link was deactivated
    pub async fn redirect_target(
        &self,
        short_code: &str,
        access: NewAccessLog,
    ) -> Result<String, AppError> {
        let url = self
            .url_repository
            .record_access(short_code, access)
            .await?
            .ok_or_else(|| {
                tracing::warn!(short_code = %short_code, "Short code not found");
                AppError::not_found("Short URL not found", json!({ "shortCode": short_code }))
            })?;

        if url.is_expired() {
            tracing::warn!(short_code = %short_code, "Link has expired");
            return Err(AppError::expired(
                "The link has expired",
                json!({ "shortCode": short_code, "expiresAt": url.expires_at }),
            ));
        }

        if !url.is_active {
            tracing::warn!(short_code = %short_code, "Link is deactivated");
            return Err(AppError::inactive(
                "The link has been deactivated",
                json!({ "shortCode": short_code }),
            ));
        }

        tracing::info!(
            short_code = %short_code,
            long_url = %url.long_url,
            clicks = url.clicks,
            "Redirecting"
        );

        Ok(url.long_url)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no Url has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Url, AppError> {
        self.url_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| url_not_found(id))
    }

    /// Lists Urls newest first.
    pub async fn list(&self, request: PageRequest) -> Result<Page<Url>, AppError> {
        let total = self.url_repository.count().await?;
        let items = self
            .url_repository
            .list(request.offset(), request.limit())
            .await?;

        tracing::debug!(
            page_number = request.page_number,
            page_size = request.page_size,
            total,
            "Listed URLs"
        );

        Ok(Page::new(items, request, total))
    }

    /// Replaces the target of an existing Url.
    ///
    /// The new value is stored verbatim; only emptiness is checked.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no Url has this id
    /// - [`AppError::Validation`] if `long_url` is empty
    pub async fn update(&self, id: i64, long_url: &str) -> Result<Url, AppError> {
        if self.url_repository.find_by_id(id).await?.is_none() {
            return Err(url_not_found(id));
        }

        if long_url.is_empty() {
            return Err(AppError::bad_request("URL cannot be empty", json!({ "id": id })));
        }

        let url = self
            .url_repository
            .update_long_url(id, long_url)
            .await?
            .ok_or_else(|| url_not_found(id))?;

        tracing::info!(id, long_url = %url.long_url, "URL updated");

        Ok(url)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no Url has this id.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<Url, AppError> {
        let url = self
            .url_repository
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| url_not_found(id))?;

        tracing::info!(id, is_active, "URL status changed");

        Ok(url)
    }

    /// Permanently removes a Url together with its access logs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no Url has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.url_repository.delete(id).await? {
            return Err(url_not_found(id));
        }

        tracing::info!(id, "URL deleted");

        Ok(())
    }

    /// Read-only lookup of a short code with its derived status.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown
    /// - [`AppError::Inactive`] if the link was deactivated
    /// - [`AppError::Expired`] if the link is past its expiry
    pub async fn expand(&self, short_code: &str) -> Result<(Url, UrlStatus), AppError> {
        let url = self
            .url_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortCode": short_code }))
            })?;

        if !url.is_active {
            return Err(AppError::inactive(
                "This URL is disabled",
                json!({ "shortCode": short_code }),
            ));
        }

        let now = Utc::now();
        if url.is_expired_at(now) {
            return Err(AppError::expired(
                "This URL has expired",
                json!({ "shortCode": short_code, "expiresAt": url.expires_at }),
            ));
        }

        let status = url.status_at(now);
        Ok((url, status))
    }

    /// Renders the QR image for a stored Url and records its path.
    ///
    /// Failures are logged and the Url is returned without a path.
    async fn attach_qr_code(&self, url: Url, origin: &str) -> Url {
        let link = short_url(origin, &url.short_code);
        let path = match self.qr_generator.generate(&link, &url.short_code).await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(short_code = %url.short_code, error = %e, "QR code generation failed");
                return url;
            }
        };

        match self.url_repository.set_qr_code_path(url.id, &path).await {
            Ok(true) => Url {
                qr_code_path: Some(path),
                ..url
            },
            Ok(false) => url,
            Err(e) => {
                tracing::warn!(id = url.id, error = %e, "Failed to store QR code path");
                url
            }
        }
    }

    async fn claim_alias(&self, raw_alias: &str) -> Result<String, AppError> {
        let alias = sanitize_alias(raw_alias);

        if alias.is_empty() {
            tracing::warn!(alias = %raw_alias, "Alias contains invalid characters");
            return Err(AppError::bad_request(
                "Alias contains invalid characters",
                json!({ "customAlias": raw_alias }),
            ));
        }

        if is_reserved(&alias) {
            return Err(AppError::bad_request(
                "Alias is reserved",
                json!({ "customAlias": alias }),
            ));
        }

        if self.url_repository.exists_by_code(&alias).await? {
            tracing::warn!(alias = %alias, "Alias already in use");
            return Err(AppError::conflict(
                "Alias is already in use. Choose another one.",
                json!({ "customAlias": alias }),
            ));
        }

        Ok(alias)
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code()?;

            if is_reserved(&code) {
                continue;
            }

            if !self.url_repository.exists_by_code(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

fn url_not_found(id: i64) -> AppError {
    AppError::not_found("URL not found", json!({ "id": id }))
}
