//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::extract::{AppPath, ClientInfo};
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{shortCode}`
///
/// # Request Flow
///
/// 1. Increment the click counter and append an access log (one transaction)
/// 2. Reject expired links, then inactive links
/// 3. Return 302 Found with `Location: longUrl`
///
/// Step 1 happens even for links rejected in step 2.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if the link is expired or deactivated.
pub async fn redirect_handler(
    AppPath(short_code): AppPath<String>,
    State(state): State<AppState>,
    ClientInfo(access): ClientInfo,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state
        .url_service
        .redirect_target(&short_code, access)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
