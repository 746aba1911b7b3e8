//! Handlers for top-URL analytics.

use axum::{Json, extract::State};

use crate::api::dto::analytics::TopUrlItem;
use crate::api::dto::pagination::DateRangeParams;
use crate::api::extract::{AppQuery, RequestOrigin};
use crate::error::AppError;
use crate::state::AppState;

/// Ten most clicked URLs.
///
/// # Endpoint
///
/// `GET /analytics/top`
pub async fn top_urls_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
) -> Result<Json<Vec<TopUrlItem>>, AppError> {
    let top = state.analytics_service.top_urls().await?;

    Ok(Json(
        top.into_iter()
            .map(|t| TopUrlItem::from_top(t, &origin))
            .collect(),
    ))
}

/// Ten most accessed URLs within a date range.
///
/// # Endpoint
///
/// `GET /analytics/topByDate?fromDate=2025-09-10&toDate=2025-09-18`
///
/// Both bounds are optional and inclusive. `clicks` counts access logs in the
/// range, not the lifetime counter.
pub async fn top_urls_by_date_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<Json<Vec<TopUrlItem>>, AppError> {
    let top = state
        .analytics_service
        .top_urls_by_date(params.to_range())
        .await?;

    Ok(Json(
        top.into_iter()
            .map(|t| TopUrlItem::from_top(t, &origin))
            .collect(),
    ))
}
