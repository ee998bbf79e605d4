//! Failure taxonomy for backend calls and local pre-request checks.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures (`NetworkUnavailable`) are kept apart from backend
//! rejections (`Unauthorized`) so the UI can tell "try again" from "wrong
//! password". Local checks (`Validation`, `Forbidden`) never reach the wire.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request never got a response (timeout, refused connection, offline).
    #[error("backend unreachable: {0}")]
    NetworkUnavailable(String),
    /// Backend rejected the request with a 4xx status.
    #[error("request rejected ({status}): {message}")]
    Unauthorized { status: u16, message: String },
    /// A required field was missing; detected before issuing a request.
    #[error("{0}")]
    Validation(String),
    /// 5xx, undecodable body, or anything else.
    #[error("unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },
    /// Privileged operation attempted without an admin session.
    #[error("{0}")]
    Forbidden(String),
    /// Backend-confirmed identity carried a role claim we do not recognize.
    #[error("unrecognized role claim: {0:?}")]
    UnrecognizedRole(String),
    /// Completion discarded because a newer session operation was issued.
    #[error("superseded by a newer session operation")]
    Superseded,
}

impl ApiError {
    /// Classify a non-success HTTP response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = response_message(status, body);
        if (400..500).contains(&status) {
            Self::Unauthorized { status, message }
        } else {
            Self::Unexpected { status, message }
        }
    }

    /// Error used by the inert non-browser build of the HTTP client.
    #[must_use]
    pub fn not_in_browser() -> Self {
        Self::NetworkUnavailable("not available on server".to_owned())
    }

    /// Only transport failures are worth retrying unchanged.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkUnavailable(_))
    }

    /// Text shown to the user in modals and inline messages.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkUnavailable(_) => "Cannot reach the server. Please try again.".to_owned(),
            Self::Unauthorized { message, .. } | Self::Unexpected { message, .. } => message.clone(),
            Self::Validation(message) | Self::Forbidden(message) => message.clone(),
            Self::UnrecognizedRole(_) => "Your account has no recognized role. You have been signed out.".to_owned(),
            Self::Superseded => "The session changed before this request finished.".to_owned(),
        }
    }
}

/// Pick the most useful message from an error response body.
///
/// JSON `{"message": ...}` wins, then non-empty raw text, then a status line.
fn response_message(status: u16, body: &str) -> String {
    if let Ok(ErrorBody { message: Some(message) }) = serde_json::from_str::<ErrorBody>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        format!("HTTP error! Status: {status}")
    } else {
        trimmed.to_owned()
    }
}
