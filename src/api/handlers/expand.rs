//! Handler for read-only short code lookup.

use axum::{Json, extract::State};

use crate::api::dto::url::ExpandResponse;
use crate::api::extract::{AppPath, RequestOrigin};
use crate::error::AppError;
use crate::state::AppState;

/// Shows where a short code points without following it.
///
/// # Endpoint
///
/// `GET /expand/{shortCode}`
///
/// Does not touch the click counter or the access log.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes.
/// Returns 400 Bad Request for disabled links, then for expired ones.
pub async fn expand_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppPath(short_code): AppPath<String>,
) -> Result<Json<ExpandResponse>, AppError> {
    let (url, status) = state.url_service.expand(&short_code).await?;
    Ok(Json(ExpandResponse::new(url, status, &origin)))
}
