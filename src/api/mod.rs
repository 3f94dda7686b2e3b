//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::HOST, request::Parts},
};

/// Extractor for the scheme and host of the current request
///
/// Link hrefs are absolute URLs, so handlers need to know how the client
/// addressed the server. Proxy headers take precedence over the Host header.
pub struct RequestContext {
    pub scheme: String,
    pub host: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("http")
            .to_string();

        let host = parts
            .headers
            .get("x-forwarded-host")
            .or_else(|| parts.headers.get(HOST))
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost")
            .to_string();

        Ok(RequestContext { scheme, host })
    }
}
