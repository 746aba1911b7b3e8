//! Request extractors shared by the handlers.
//!
//! Rejections from these extractors are [`AppError`]s, so malformed input
//! gets the same JSON error body as every other failure.

use axum::{
    Json,
    extract::{ConnectInfo, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::net::SocketAddr;

use crate::domain::entities::NewAccessLog;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{client_ip, extract_origin_from_headers, user_agent};

/// The `{scheme}://{host}` this request was addressed to.
#[derive(Debug, Clone)]
pub struct RequestOrigin(pub String);

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        extract_origin_from_headers(&parts.headers, &state.public_scheme, state.behind_proxy)
            .map(RequestOrigin)
    }
}

/// Client IP and user agent for access logging.
///
/// Never rejects: both fields are simply absent when unknown.
#[derive(Debug, Clone)]
pub struct ClientInfo(pub NewAccessLog);

impl FromRequestParts<AppState> for ClientInfo {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientInfo(NewAccessLog::new(
            client_ip(&parts.headers, peer, state.behind_proxy),
            user_agent(&parts.headers),
        )))
    }
}

/// `Json<T>` whose rejection is an [`AppError::Validation`].
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// `Query<T>` whose rejection is an [`AppError::Validation`].
#[derive(Debug)]
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(AppQuery(value))
    }
}

/// `Path<T>` whose rejection is an [`AppError::Validation`].
#[derive(Debug)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(AppPath(value))
    }
}
