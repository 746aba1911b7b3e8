//! Handler for the shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::{AppJson, RequestOrigin};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/some/long/path",
///   "expiresAt": "2030-01-01T00:00:00Z",
///   "customAlias": "promo"
/// }
/// ```
///
/// Only `longUrl` is required.
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "shortCode": "promo",
///   "originalUrl": "https://example.com/some/long/path",
///   "shortUrl": "http://s.example.com/promo",
///   "createdAt": "2025-01-01T12:00:00Z",
///   "expiresAt": "2030-01-01T00:00:00Z",
///   "isActive": true,
///   "qrCodePath": "/qrcodes/promo.png"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for empty/invalid URLs and unusable aliases.
/// Returns 409 Conflict if the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    AppJson(payload): AppJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let url = state.url_service.create(&origin, payload.into()).await?;

    Ok(Json(ShortenResponse::from_url(url, &origin)))
}
