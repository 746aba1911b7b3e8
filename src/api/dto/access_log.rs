//! DTOs for the access log endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::AccessLogReport;
use crate::domain::entities::AccessLog;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogItem {
    pub id: i64,
    pub accessed_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl From<AccessLog> for AccessLogItem {
    fn from(log: AccessLog) -> Self {
        Self {
            id: log.id,
            accessed_at: log.accessed_at,
            ip_address: log.ip_address,
            user_agent: log.user_agent,
        }
    }
}

/// `GET /urls/{id}/accesslogs` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogResponse {
    pub url_id: i64,
    pub short_code: String,
    pub short_url: String,
    pub page_number: i64,
    pub page_size: i64,
    pub total_logs: i64,
    pub total_pages: i64,
    pub first_access: Option<DateTime<Utc>>,
    pub last_access: Option<DateTime<Utc>>,
    pub logs: Vec<AccessLogItem>,
}

impl AccessLogResponse {
    pub fn from_report(report: AccessLogReport, origin: &str) -> Self {
        let AccessLogReport {
            url,
            page,
            first_access,
            last_access,
        } = report;

        Self {
            short_url: url.short_url(origin),
            url_id: url.id,
            short_code: url.short_code,
            page_number: page.page_number,
            page_size: page.page_size,
            total_logs: page.total_items,
            total_pages: page.total_pages,
            first_access,
            last_access,
            logs: page.items.into_iter().map(AccessLogItem::from).collect(),
        }
    }
}
