//! Host server error types.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Failure while forwarding a request to the identity backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body could not be read: {0}")]
    Body(String),
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// Startup failures surfaced from `main`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client init failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
