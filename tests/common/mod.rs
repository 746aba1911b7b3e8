#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;
use url_shortener_api::domain::entities::{AccessLog, NewAccessLog, NewUrl, Url};
use url_shortener_api::domain::qr_code::{QrCodeError, QrCodeGenerator};
use url_shortener_api::domain::repositories::{
    AccessLogRepository, AnalyticsRepository, DateRange, TopUrl, UrlRepository,
};
use url_shortener_api::error::AppError;
use url_shortener_api::routes::build_router;
use url_shortener_api::state::AppState;

pub const HOST: &str = "s.example.com";
pub const ORIGIN: &str = "http://s.example.com";
pub const PEER_IP: &str = "127.0.0.1";

#[derive(Default)]
struct Inner {
    next_url_id: i64,
    next_log_id: i64,
    urls: Vec<Url>,
    logs: Vec<AccessLog>,
}

/// In-memory stand-in for the PostgreSQL repositories.
///
/// Mirrors the SQL semantics the handlers rely on: unique short codes,
/// newest-first ordering, cascade delete and the redirect side effects.
#[derive(Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a Url directly, bypassing the service.
    pub fn seed(&self, short_code: &str, long_url: &str) -> Url {
        let mut inner = self.inner.lock().unwrap();
        inner.next_url_id += 1;
        let url = Url {
            id: inner.next_url_id,
            short_code: short_code.to_string(),
            long_url: long_url.to_string(),
            is_active: true,
            created_at: Utc::now(),
            expires_at: None,
            last_accessed_at: None,
            clicks: 0,
            qr_code_path: None,
        };
        inner.urls.push(url.clone());
        url
    }

    /// Applies `f` to the stored Url with this id.
    pub fn modify(&self, id: i64, f: impl FnOnce(&mut Url)) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(url) = inner.urls.iter_mut().find(|u| u.id == id) {
            f(url);
        }
    }

    /// Appends an access log with an explicit timestamp.
    pub fn seed_log(&self, url_id: i64, accessed_at: DateTime<Utc>) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_log_id += 1;
        let id = inner.next_log_id;
        inner.logs.push(AccessLog {
            id,
            url_id,
            accessed_at,
            ip_address: Some("10.0.0.1".to_string()),
            user_agent: Some("SeedBot/1.0".to_string()),
        });
    }

    pub fn url(&self, id: i64) -> Option<Url> {
        self.inner
            .lock()
            .unwrap()
            .urls
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn logs_for(&self, url_id: i64) -> Vec<AccessLog> {
        self.inner
            .lock()
            .unwrap()
            .logs
            .iter()
            .filter(|l| l.url_id == url_id)
            .cloned()
            .collect()
    }

    pub fn log_count(&self) -> usize {
        self.inner.lock().unwrap().logs.len()
    }
}

fn newest_first(urls: &mut [Url]) {
    urls.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

fn page<T: Clone>(items: &[T], offset: i64, limit: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl UrlRepository for MemoryStore {
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.urls.iter().any(|u| u.short_code == new_url.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_code_key" }),
            ));
        }

        inner.next_url_id += 1;
        let url = Url {
            id: inner.next_url_id,
            short_code: new_url.short_code,
            long_url: new_url.long_url,
            is_active: true,
            created_at: Utc::now(),
            expires_at: new_url.expires_at,
            last_accessed_at: None,
            clicks: 0,
            qr_code_path: None,
        };
        inner.urls.push(url.clone());
        Ok(url)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Url>, AppError> {
        Ok(self.url(id))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Url>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .urls
            .iter()
            .find(|u| u.short_code == short_code)
            .cloned())
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.urls.iter().any(|u| u.short_code == short_code))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Url>, AppError> {
        let mut urls = self.inner.lock().unwrap().urls.clone();
        newest_first(&mut urls);
        Ok(page(&urls, offset, limit))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.lock().unwrap().urls.len() as i64)
    }

    async fn update_long_url(&self, id: i64, long_url: &str) -> Result<Option<Url>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.urls.iter_mut().find(|u| u.id == id).map(|u| {
            u.long_url = long_url.to_string();
            u.clone()
        }))
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<Url>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.urls.iter_mut().find(|u| u.id == id).map(|u| {
            u.is_active = is_active;
            u.clone()
        }))
    }

    async fn set_qr_code_path(&self, id: i64, qr_code_path: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.urls.iter_mut().find(|u| u.id == id) {
            Some(url) => {
                url.qr_code_path = Some(qr_code_path.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.urls.len();
        inner.urls.retain(|u| u.id != id);
        let removed = inner.urls.len() != before;
        if removed {
            inner.logs.retain(|l| l.url_id != id);
        }
        Ok(removed)
    }

    async fn record_access(
        &self,
        short_code: &str,
        access: NewAccessLog,
    ) -> Result<Option<Url>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();

        let Some(url) = inner.urls.iter_mut().find(|u| u.short_code == short_code) else {
            return Ok(None);
        };
        url.clicks += 1;
        url.last_accessed_at = Some(now);
        let url = url.clone();

        inner.next_log_id += 1;
        let id = inner.next_log_id;
        inner.logs.push(AccessLog {
            id,
            url_id: url.id,
            accessed_at: now,
            ip_address: access.ip_address,
            user_agent: access.user_agent,
        });

        Ok(Some(url))
    }
}

#[async_trait]
impl AccessLogRepository for MemoryStore {
    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError> {
        Ok(self.logs_for(url_id).len() as i64)
    }

    async fn list_by_url(
        &self,
        url_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AccessLog>, AppError> {
        let mut logs = self.logs_for(url_id);
        logs.sort_by(|a, b| b.accessed_at.cmp(&a.accessed_at).then(b.id.cmp(&a.id)));
        Ok(page(&logs, offset, limit))
    }

    async fn first_access(&self, url_id: i64) -> Result<Option<DateTime<Utc>>, AppError> {
        Ok(self.logs_for(url_id).iter().map(|l| l.accessed_at).min())
    }
}

#[async_trait]
impl AnalyticsRepository for MemoryStore {
    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<TopUrl>, AppError> {
        let mut urls = self.inner.lock().unwrap().urls.clone();
        urls.sort_by(|a, b| b.clicks.cmp(&a.clicks).then(a.id.cmp(&b.id)));

        Ok(page(&urls, 0, limit)
            .into_iter()
            .map(|u| TopUrl {
                url_id: u.id,
                short_code: u.short_code,
                long_url: u.long_url,
                clicks: u.clicks,
                last_accessed_at: u.last_accessed_at,
            })
            .collect())
    }

    async fn top_by_access_range(
        &self,
        range: DateRange,
        limit: i64,
    ) -> Result<Vec<TopUrl>, AppError> {
        let inner = self.inner.lock().unwrap();

        let mut hits: HashMap<i64, i64> = HashMap::new();
        for log in inner.logs.iter().filter(|l| range.contains(l.accessed_at)) {
            *hits.entry(log.url_id).or_default() += 1;
        }

        let mut ranked: Vec<(i64, i64)> = hits.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Ok(page(&ranked, 0, limit)
            .into_iter()
            .filter_map(|(url_id, count)| {
                inner.urls.iter().find(|u| u.id == url_id).map(|u| TopUrl {
                    url_id,
                    short_code: u.short_code.clone(),
                    long_url: u.long_url.clone(),
                    clicks: count,
                    last_accessed_at: u.last_accessed_at,
                })
            })
            .collect())
    }
}

/// Records what it was asked to render instead of touching the disk.
#[derive(Default)]
pub struct RecordingQr {
    pub rendered: Mutex<Vec<String>>,
}

#[async_trait]
impl QrCodeGenerator for RecordingQr {
    async fn generate(&self, content: &str, file_stem: &str) -> Result<String, QrCodeError> {
        self.rendered.lock().unwrap().push(content.to_string());
        Ok(format!("/qrcodes/{}.png", file_stem))
    }
}

pub struct FailingQr;

#[async_trait]
impl QrCodeGenerator for FailingQr {
    async fn generate(&self, _content: &str, _file_stem: &str) -> Result<String, QrCodeError> {
        Err(QrCodeError::Write("read-only file system".to_string()))
    }
}

pub fn create_test_state(store: &MemoryStore, qr: Arc<dyn QrCodeGenerator>) -> AppState {
    let store = Arc::new(store.clone());
    AppState::new(store.clone(), store.clone(), store, qr)
}

/// Test server over the full router backed by `store`.
pub fn create_test_server(store: &MemoryStore) -> TestServer {
    server_with_state(create_test_state(store, Arc::new(RecordingQr::default())))
}

pub fn server_with_state(state: AppState) -> TestServer {
    TestServer::new(build_router(state, qr_dir())).unwrap()
}

/// Like [`create_test_server`], with a fixed peer address attached to every
/// request.
pub fn create_test_server_with_peer(store: &MemoryStore) -> TestServer {
    let state = create_test_state(store, Arc::new(RecordingQr::default()));
    let app = build_router(state, qr_dir()).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

fn qr_dir() -> std::path::PathBuf {
    std::env::temp_dir().join("url-shortener-api-tests-qrcodes")
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{}:12345", PEER_IP).parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
