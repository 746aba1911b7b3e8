//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccessLogService, AnalyticsService, UrlService};
use crate::domain::qr_code::QrCodeGenerator;
use crate::domain::repositories::{AccessLogRepository, AnalyticsRepository, UrlRepository};

pub type DynUrlService = UrlService<dyn UrlRepository, dyn QrCodeGenerator>;
pub type DynAccessLogService = AccessLogService<dyn UrlRepository, dyn AccessLogRepository>;
pub type DynAnalyticsService = AnalyticsService<dyn AnalyticsRepository>;

/// Services plus the request-origin settings.
///
/// Services are built over trait objects so the same router runs against
/// PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DynUrlService>,
    pub access_log_service: Arc<DynAccessLogService>,
    pub analytics_service: Arc<DynAnalyticsService>,
    /// Trust `X-Forwarded-Proto` / `X-Forwarded-For`.
    pub behind_proxy: bool,
    /// Scheme used for short URLs when not taken from a proxy header.
    pub public_scheme: String,
}

impl AppState {
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        access_log_repository: Arc<dyn AccessLogRepository>,
        analytics_repository: Arc<dyn AnalyticsRepository>,
        qr_generator: Arc<dyn QrCodeGenerator>,
    ) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(url_repository.clone(), qr_generator)),
            access_log_service: Arc::new(AccessLogService::new(
                url_repository,
                access_log_repository,
            )),
            analytics_service: Arc::new(AnalyticsService::new(analytics_repository)),
            behind_proxy: false,
            public_scheme: "http".to_string(),
        }
    }

    pub fn with_origin_settings(
        mut self,
        behind_proxy: bool,
        public_scheme: impl Into<String>,
    ) -> Self {
        self.behind_proxy = behind_proxy;
        self.public_scheme = public_scheme.into();
        self
    }
}
