//! Handler for per-URL access logs.

use axum::{Json, extract::State};

use crate::api::dto::access_log::AccessLogResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::extract::{AppPath, AppQuery, RequestOrigin};
use crate::error::AppError;
use crate::state::AppState;

/// Paginated access history of one URL.
///
/// # Endpoint
///
/// `GET /urls/{id}/accesslogs?pageNumber=1&pageSize=10`
///
/// # Response
///
/// `firstAccess` is the earliest access overall; `lastAccess` is the newest
/// access on the returned page.
///
/// # Errors
///
/// Returns 404 Not Found if no URL has this id.
pub async fn access_logs_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppPath(id): AppPath<i64>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<Json<AccessLogResponse>, AppError> {
    let report = state
        .access_log_service
        .get_access_logs(id, params.to_page_request())
        .await?;

    Ok(Json(AccessLogResponse::from_report(report, &origin)))
}
