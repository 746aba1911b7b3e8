//! Top-level router combining the API, redirects and QR images.
//!
//! # Route Structure
//!
//! - `GET  /{shortCode}`  - Short link redirect
//! - `GET  /qrcodes/*`    - Generated QR PNGs
//! - everything else      - JSON API, see [`crate::api::routes::api_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router without path normalization.
///
/// `qr_code_dir` is served under `/qrcodes`.
pub fn build_router(state: AppState, qr_code_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(api::routes::api_routes())
        .route("/{short_code}", get(redirect_handler))
        .nest_service("/qrcodes", ServeDir::new(qr_code_dir.as_ref()))
        .with_state(state)
        .layer(tracing::layer())
}

/// Application service with trailing slashes trimmed before routing.
pub fn app_router(state: AppState, qr_code_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, qr_code_dir))
}
