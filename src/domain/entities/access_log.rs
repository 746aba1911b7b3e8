//! Access log entity recorded on every redirect attempt.

use chrono::{DateTime, Utc};

/// One redirect attempt against a [`super::Url`].
///
/// Written before the expiry/active checks, so rejected redirects are logged too.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLog {
    pub id: i64,
    pub url_id: i64,
    pub accessed_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Client metadata captured from the redirect request.
///
/// Both fields are optional: the peer address is unknown in some deployments
/// and clients are free to omit `User-Agent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAccessLog {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl NewAccessLog {
    pub fn new(ip_address: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            ip_address,
            user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_access_log_default_is_anonymous() {
        let access = NewAccessLog::default();
        assert!(access.ip_address.is_none());
        assert!(access.user_agent.is_none());
    }

    #[test]
    fn test_new_access_log_keeps_client_info() {
        let access = NewAccessLog::new(
            Some("10.0.0.1".to_string()),
            Some("Mozilla/5.0".to_string()),
        );
        assert_eq!(access.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(access.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
