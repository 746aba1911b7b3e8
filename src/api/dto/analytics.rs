//! DTOs for analytics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::short_url;
use crate::domain::repositories::TopUrl;

/// One ranked entry of `GET /analytics/top` and `/analytics/topByDate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUrlItem {
    pub url_id: i64,
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub clicks: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl TopUrlItem {
    pub fn from_top(top: TopUrl, origin: &str) -> Self {
        Self {
            short_url: short_url(origin, &top.short_code),
            url_id: top.url_id,
            short_code: top.short_code,
            long_url: top.long_url,
            clicks: top.clicks,
            last_accessed_at: top.last_accessed_at,
        }
    }
}
