//! Handlers for reading and managing stored URLs.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::url::{
    MessageResponse, UpdateUrlRequest, UrlListResponse, UrlResponse, UrlStatusResponse,
};
use crate::api::extract::{AppJson, AppPath, AppQuery, RequestOrigin};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no URL has this id.
pub async fn get_url_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppPath(id): AppPath<i64>,
) -> Result<Json<UrlResponse>, AppError> {
    let url = state.url_service.get_by_id(id).await?;
    Ok(Json(UrlResponse::from_url(url, &origin)))
}

/// Lists URLs, newest first.
///
/// # Endpoint
///
/// `GET /urls?pageNumber=1&pageSize=10`
///
/// Values below 1 fall back to page 1 and size 10.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<Json<UrlListResponse>, AppError> {
    let page = state.url_service.list(params.to_page_request()).await?;
    Ok(Json(UrlListResponse::from_page(page, &origin)))
}

/// Replaces the target of a URL.
///
/// # Endpoint
///
/// `PUT /urls/{id}` with `{"longUrl": "..."}`
///
/// # Errors
///
/// Returns 404 Not Found if no URL has this id.
/// Returns 400 Bad Request if `longUrl` is empty.
pub async fn update_url_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let url = state.url_service.update(id, &payload.long_url).await?;
    Ok(Json(UrlResponse::from_url(url, &origin)))
}

/// Activates or deactivates a URL.
///
/// # Endpoint
///
/// `PUT /urls/{id}/status` with a bare JSON boolean body (`true` / `false`).
pub async fn set_status_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(is_active): AppJson<bool>,
) -> Result<Json<UrlStatusResponse>, AppError> {
    let url = state.url_service.set_active(id, is_active).await?;
    Ok(Json(url.into()))
}

/// `DELETE /urls/{id}`
///
/// Access logs of the URL are removed with it.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.url_service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("URL with ID {} deleted successfully.", id),
    }))
}
