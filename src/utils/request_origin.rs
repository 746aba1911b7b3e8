//! Origin and client details derived from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Builds the public origin (`{scheme}://{host}`) a request was addressed to.
///
/// The host comes from the `Host` header with its port kept, so short links
/// issued on `localhost:3000` point back to `localhost:3000`. The scheme is
/// `X-Forwarded-Proto` when `trust_forwarded` is set and the header is valid,
/// otherwise `default_scheme`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8080".parse().unwrap());
///
/// let origin = extract_origin_from_headers(&headers, "http", false).unwrap();
/// assert_eq!(origin, "http://s.example.com:8080");
/// ```
pub fn extract_origin_from_headers(
    headers: &HeaderMap,
    default_scheme: &str,
    trust_forwarded: bool,
) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Invalid Host header",
            serde_json::json!({}),
        ));
    }

    let forwarded_scheme = trust_forwarded
        .then(|| headers.get(X_FORWARDED_PROTO))
        .flatten()
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https");

    let scheme = forwarded_scheme.unwrap_or_else(|| default_scheme.to_string());

    Ok(format!("{}://{}", scheme, host))
}

/// Picks the client IP for access logging.
///
/// Behind a trusted proxy the left-most `X-Forwarded-For` entry wins; otherwise
/// the peer socket address is used. Returns `None` when neither is available.
pub fn client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded: bool,
) -> Option<String> {
    if trust_forwarded
        && let Some(forwarded) = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    {
        return Some(forwarded.to_string());
    }

    peer.map(|addr| addr.ip().to_string())
}

/// Returns the `User-Agent` header, if present and valid UTF-8.
pub fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
