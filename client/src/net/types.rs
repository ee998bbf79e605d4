//! Wire DTOs for the identity backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (camelCase where it differs from
//! Rust naming) so serde handles the mapping without hand-written adapters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Which login endpoint a credential submission targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginPortal {
    User,
    Admin,
}

impl LoginPortal {
    /// Heading and submit-button text for the login form.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::User => "User Login",
            Self::Admin => "Admin Login",
        }
    }
}

/// Identity record as returned by the login endpoints and `/api/auth/me`.
///
/// `role` is the backend-asserted claim; it is left as raw text here and only
/// interpreted by [`crate::state::session::Principal::from_record`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Unique principal identifier.
    pub uid: String,
    /// Display / contact email.
    #[serde(default)]
    pub email: String,
    /// Role claim (`"user"` or `"admin"`), if the backend sent one.
    #[serde(default)]
    pub role: Option<String>,
    /// Bearer credential for subsequent authorized requests.
    #[serde(default, alias = "idToken")]
    pub token: Option<String>,
}

/// Email + password submitted to a login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form input, trimming the email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when either field is empty.
    pub fn from_input(email: &str, password: &str) -> Result<Self, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation("Enter both email and password.".to_owned()));
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/auth/logout/admin` and `POST /auth/set-admin-claim`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UidRequest<'a> {
    pub uid: &'a str,
}

/// Body of `POST /notifications/send-custom-notification`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest<'a> {
    pub target_uid: &'a str,
    pub message: &'a str,
}

/// Optional JSON error body (`{"message": "..."}`) some endpoints return.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
