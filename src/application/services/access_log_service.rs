//! Per-URL access log reporting.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{AccessLog, Url};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::AppError;

/// A page of access logs for one Url plus its first/last access summary.
#[derive(Debug, Clone)]
pub struct AccessLogReport {
    pub url: Url,
    pub page: Page<AccessLog>,
    /// Earliest access across all logs of the Url.
    pub first_access: Option<DateTime<Utc>>,
    /// Most recent access on the returned page (not across all logs).
    pub last_access: Option<DateTime<Utc>>,
}

/// Service for reading the access history of a Url.
pub struct AccessLogService<U: UrlRepository + ?Sized, A: AccessLogRepository + ?Sized> {
    url_repository: Arc<U>,
    access_log_repository: Arc<A>,
}

impl<U: UrlRepository + ?Sized, A: AccessLogRepository + ?Sized> AccessLogService<U, A> {
    pub fn new(url_repository: Arc<U>, access_log_repository: Arc<A>) -> Self {
        Self {
            url_repository,
            access_log_repository,
        }
    }

    /// Returns one page of logs, newest first.
    ///
    /// `last_access` is taken from the first entry of the returned page, so
    /// on page 2 and later it is not the overall most recent access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the Url does not exist.
    pub async fn get_access_logs(
        &self,
        url_id: i64,
        request: PageRequest,
    ) -> Result<AccessLogReport, AppError> {
        let url = self
            .url_repository
            .find_by_id(url_id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": url_id })))?;

        let total = self.access_log_repository.count_by_url(url_id).await?;
        let logs = self
            .access_log_repository
            .list_by_url(url_id, request.offset(), request.limit())
            .await?;
        let first_access = self.access_log_repository.first_access(url_id).await?;
        let last_access = logs.first().map(|log| log.accessed_at);

        tracing::debug!(
            url_id,
            page_number = request.page_number,
            total,
            "Access logs retrieved"
        );

        Ok(AccessLogReport {
            url,
            page: Page::new(logs, request, total),
            first_access,
            last_access,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::url::sample_url;
    use crate::domain::repositories::{MockAccessLogRepository, MockUrlRepository};
    use chrono::{Duration, TimeZone};

    fn log_at(id: i64, accessed_at: DateTime<Utc>) -> AccessLog {
        AccessLog {
            id,
            url_id: 1,
            accessed_at,
            ip_address: Some("127.0.0.1".to_string()),
            user_agent: Some("TestBot/1.0".to_string()),
        }
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn url_repo_with(id: i64) -> MockUrlRepository {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(sample_url(id, "abc123"))));
        repo
    }

    #[tokio::test]
    async fn test_second_page_of_three() {
        let t0 = base_time();
        let mut logs = MockAccessLogRepository::new();
        logs.expect_count_by_url().returning(|_| Ok(3));
        logs.expect_list_by_url()
            .withf(|url_id, offset, limit| *url_id == 1 && *offset == 1 && *limit == 1)
            .times(1)
            .returning(move |_, _, _| Ok(vec![log_at(2, t0 + Duration::minutes(1))]));
        logs.expect_first_access().returning(move |_| Ok(Some(t0)));

        let service = AccessLogService::new(Arc::new(url_repo_with(1)), Arc::new(logs));
        let report = service
            .get_access_logs(1, PageRequest::new(2, 1))
            .await
            .unwrap();

        assert_eq!(report.page.items.len(), 1);
        assert_eq!(report.page.total_items, 3);
        assert_eq!(report.page.total_pages, 3);
        assert_eq!(report.first_access, Some(t0));
    }

    #[tokio::test]
    async fn test_last_access_is_page_relative() {
        let t0 = base_time();
        let newest = t0 + Duration::minutes(2);
        let middle = t0 + Duration::minutes(1);

        let mut logs = MockAccessLogRepository::new();
        logs.expect_count_by_url().returning(|_| Ok(3));
        logs.expect_list_by_url()
            .returning(move |_, _, _| Ok(vec![log_at(2, middle)]));
        logs.expect_first_access().returning(move |_| Ok(Some(t0)));

        let service = AccessLogService::new(Arc::new(url_repo_with(1)), Arc::new(logs));
        let report = service
            .get_access_logs(1, PageRequest::new(2, 1))
            .await
            .unwrap();

        assert_eq!(report.last_access, Some(middle));
        assert_ne!(report.last_access, Some(newest));
    }

    #[tokio::test]
    async fn test_no_logs() {
        let mut logs = MockAccessLogRepository::new();
        logs.expect_count_by_url().returning(|_| Ok(0));
        logs.expect_list_by_url().returning(|_, _, _| Ok(vec![]));
        logs.expect_first_access().returning(|_| Ok(None));

        let service = AccessLogService::new(Arc::new(url_repo_with(1)), Arc::new(logs));
        let report = service
            .get_access_logs(1, PageRequest::default())
            .await
            .unwrap();

        assert!(report.page.items.is_empty());
        assert_eq!(report.page.total_pages, 0);
        assert!(report.first_access.is_none());
        assert!(report.last_access.is_none());
    }

    #[tokio::test]
    async fn test_clamps_page_request() {
        let mut logs = MockAccessLogRepository::new();
        logs.expect_count_by_url().returning(|_| Ok(0));
        logs.expect_list_by_url()
            .withf(|_, offset, limit| *offset == 0 && *limit == 10)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        logs.expect_first_access().returning(|_| Ok(None));

        let service = AccessLogService::new(Arc::new(url_repo_with(1)), Arc::new(logs));
        let report = service
            .get_access_logs(1, PageRequest::new(-4, 0))
            .await
            .unwrap();

        assert_eq!(report.page.page_number, 1);
        assert_eq!(report.page.page_size, 10);
    }

    #[tokio::test]
    async fn test_unknown_url() {
        let mut urls = MockUrlRepository::new();
        urls.expect_find_by_id().returning(|_| Ok(None));
        let mut logs = MockAccessLogRepository::new();
        logs.expect_count_by_url().never();

        let service = AccessLogService::new(Arc::new(urls), Arc::new(logs));
        let err = service
            .get_access_logs(42, PageRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
