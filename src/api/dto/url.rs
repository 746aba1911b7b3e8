//! DTOs for reading and managing stored URLs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Url, UrlStatus};
use crate::domain::pagination::Page;

/// Full public view of a stored URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub qr_code_path: Option<String>,
}

impl UrlResponse {
    pub fn from_url(url: Url, origin: &str) -> Self {
        Self {
            short_url: url.short_url(origin),
            id: url.id,
            long_url: url.long_url,
            short_code: url.short_code,
            clicks: url.clicks,
            created_at: url.created_at,
            last_accessed_at: url.last_accessed_at,
            expires_at: url.expires_at,
            is_active: url.is_active,
            qr_code_path: url.qr_code_path,
        }
    }
}

/// `GET /urls` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListResponse {
    pub page_number: i64,
    pub page_size: i64,
    pub total_urls: i64,
    pub total_pages: i64,
    pub urls: Vec<UrlResponse>,
}

impl UrlListResponse {
    pub fn from_page(page: Page<Url>, origin: &str) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            total_urls: page.total_items,
            total_pages: page.total_pages,
            urls: page
                .items
                .into_iter()
                .map(|url| UrlResponse::from_url(url, origin))
                .collect(),
        }
    }
}

/// `PUT /urls/{id}` body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlRequest {
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub long_url: String,
}

/// `PUT /urls/{id}/status` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStatusResponse {
    pub id: i64,
    pub short_code: String,
    pub is_active: bool,
}

impl From<Url> for UrlStatusResponse {
    fn from(url: Url) -> Self {
        Self {
            id: url.id,
            short_code: url.short_code,
            is_active: url.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /expand/{shortCode}` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandResponse {
    pub long_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub clicks: i64,
    pub is_active: bool,
    pub qr_code_path: Option<String>,
    pub status: &'static str,
}

impl ExpandResponse {
    pub fn new(url: Url, status: UrlStatus, origin: &str) -> Self {
        Self {
            short_url: url.short_url(origin),
            long_url: url.long_url,
            short_code: url.short_code,
            created_at: url.created_at,
            expires_at: url.expires_at,
            last_accessed_at: url.last_accessed_at,
            clicks: url.clicks,
            is_active: url.is_active,
            qr_code_path: url.qr_code_path,
            status: status.as_str(),
        }
    }
}
