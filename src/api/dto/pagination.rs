//! Pagination and date-range query parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use crate::domain::repositories::DateRange;

/// `?pageNumber=&pageSize=` query parameters.
///
/// Out-of-range values are clamped rather than rejected: anything below 1
/// falls back to page 1 / size 10.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_number: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// `?fromDate=&toDate=` query parameters.
///
/// Each bound accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date,
/// which is read as midnight UTC.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    #[serde(default, with = "flexible_date")]
    pub from_date: Option<DateTime<Utc>>,

    #[serde(default, with = "flexible_date")]
    pub to_date: Option<DateTime<Utc>>,
}

impl DateRangeParams {
    pub fn to_range(&self) -> DateRange {
        DateRange::new(self.from_date, self.to_date)
    }
}

/// Parses a timestamp: RFC 3339, a timestamp without offset read as UTC,
/// or `YYYY-MM-DD` read as midnight UTC.
pub fn parse_date_bound(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            format!(
                "invalid date '{}': expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
                s
            )
        })
}

/// Optional timestamp field parsed with [`parse_date_bound`]; blank means absent.
pub(crate) mod flexible_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_date_bound(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
