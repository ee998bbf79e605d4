//! Same-origin proxy to the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle talks to relative paths (`/api/*`, `/auth/*`,
//! `/notifications/*`, `/admin/dashboard`). This module forwards those
//! requests to `BACKEND_URL` unchanged apart from a fixed header allow-list,
//! so the backend sees the same method, path, query and body.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderName, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::any;

use crate::config::ServerConfig;
use crate::error::ProxyError;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

const REQUEST_HEADERS: [HeaderName; 4] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT, COOKIE];
const RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: Arc<str>,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { client, backend_url: Arc::from(config.backend_url.as_str()) })
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

/// Routes forwarded to the identity backend.
pub fn routes(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(forward))
        .route("/auth/{*path}", any(forward))
        .route("/notifications/{*path}", any(forward))
        .route("/admin/dashboard", any(forward))
        .with_state(state)
}

/// Join the backend base with the incoming path and query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// Copy the allow-listed headers from `source`, in allow-list order.
pub fn forwarded_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

async fn forward(State(proxy): State<ProxyState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&proxy.backend_url, path_and_query);
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "proxying request");
    let upstream = proxy
        .client
        .request(parts.method, &url)
        .headers(forwarded_headers(&parts.headers, &REQUEST_HEADERS))
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwarded_headers(upstream.headers(), &RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
