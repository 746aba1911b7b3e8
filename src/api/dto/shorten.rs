//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreateUrl;
use crate::domain::entities::Url;

/// `POST /shorten` body.
///
/// `longUrl` defaults to an empty string when omitted so the service can
/// report it as empty rather than failing JSON extraction.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub long_url: String,

    #[serde(default, with = "crate::api::dto::pagination::flexible_date")]
    pub expires_at: Option<DateTime<Utc>>,

    #[validate(length(max = 50, message = "Alias must be at most 50 characters"))]
    pub custom_alias: Option<String>,
}

impl From<ShortenRequest> for CreateUrl {
    fn from(req: ShortenRequest) -> Self {
        CreateUrl {
            long_url: req.long_url,
            expires_at: req.expires_at,
            custom_alias: req.custom_alias,
        }
    }
}

/// Public view of a freshly created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub qr_code_path: Option<String>,
}

impl ShortenResponse {
    pub fn from_url(url: Url, origin: &str) -> Self {
        Self {
            short_url: url.short_url(origin),
            id: url.id,
            short_code: url.short_code,
            original_url: url.long_url,
            created_at: url.created_at,
            expires_at: url.expires_at,
            is_active: url.is_active,
            qr_code_path: url.qr_code_path,
        }
    }
}
