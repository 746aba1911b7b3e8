//! API route configuration.

use crate::api::handlers::{
    access_logs_handler, delete_url_handler, expand_handler, get_url_handler, list_urls_handler,
    set_status_handler, shorten_handler, top_urls_by_date_handler, top_urls_handler,
    update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `POST   /shorten`                 - Create a short URL
/// - `GET    /urls`                    - List URLs (paginated)
/// - `GET    /urls/{id}`               - URL details
/// - `PUT    /urls/{id}`               - Replace the target URL
/// - `DELETE /urls/{id}`               - Delete a URL and its logs
/// - `PUT    /urls/{id}/status`        - Activate / deactivate
/// - `GET    /urls/{id}/accesslogs`    - Access history (paginated)
/// - `GET    /expand/{shortCode}`      - Read-only lookup
/// - `GET    /analytics/top`           - Top 10 by clicks
/// - `GET    /analytics/topByDate`     - Top 10 by accesses in a date range
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{id}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/urls/{id}/status", put(set_status_handler))
        .route("/urls/{id}/accesslogs", get(access_logs_handler))
        .route("/expand/{short_code}", get(expand_handler))
        .route("/analytics/top", get(top_urls_handler))
        .route("/analytics/topByDate", get(top_urls_by_date_handler))
}
