//! Url entity representing a shortened link record.

use chrono::{DateTime, Utc};

/// Derived state of a link, reported by the expand endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStatus {
    Active,
    Inactive,
    Expired,
}

impl UrlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlStatus::Active => "active",
            UrlStatus::Inactive => "inactive",
            UrlStatus::Expired => "expired",
        }
    }
}

/// A shortened URL with its counters and lifecycle flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Url {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub clicks: i64,
    pub qr_code_path: Option<String>,
}

impl Url {
    /// Returns true once `expires_at` lies strictly in the past.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry wins over the active flag.
    pub fn status_at(&self, now: DateTime<Utc>) -> UrlStatus {
        if self.is_expired_at(now) {
            UrlStatus::Expired
        } else if self.is_active {
            UrlStatus::Active
        } else {
            UrlStatus::Inactive
        }
    }

    /// Builds the public short link for this record under `origin`
    /// (`{scheme}://{host}`).
    pub fn short_url(&self, origin: &str) -> String {
        short_url(origin, &self.short_code)
    }
}

/// Joins an origin and a short code into the externally visible link.
pub fn short_url(origin: &str, short_code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), short_code)
}

/// Input data for persisting a new Url.
///
/// Storage assigns `id`, `created_at`, `clicks = 0` and `is_active = true`.
/// The QR path is attached once the row exists.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub short_code: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
pub(crate) fn sample_url(id: i64, short_code: &str) -> Url {
    Url {
        id,
        short_code: short_code.to_string(),
        long_url: "https://example.com/".to_string(),
        is_active: true,
        created_at: Utc::now(),
        expires_at: None,
        last_accessed_at: None,
        clicks: 0,
        qr_code_path: None,
    }
}
