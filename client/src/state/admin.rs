//! Privileged admin operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the admin dashboard. Every operation checks its inputs and the
//! caller's session locally before any request is issued, then attaches the
//! caller's bearer credential. The backend still enforces authorization.
//! The caller's own session is never modified here.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::sync::Arc;

use leptos::logging::warn;

use super::session::Role;
use super::store::SessionStore;
use crate::net::backend::AdminBackend;
use crate::net::error::ApiError;

pub struct AdminConsole {
    session: Arc<SessionStore>,
    backend: Arc<dyn AdminBackend>,
}

impl AdminConsole {
    #[must_use]
    pub fn new(session: Arc<SessionStore>, backend: Arc<dyn AdminBackend>) -> Self {
        Self { session, backend }
    }

    /// Grant admin claims to `target_uid`.
    ///
    /// Returns the confirmation shown to the admin. The target's existing
    /// tokens are revoked server-side and they must sign in again.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty uid, `Forbidden` without an admin session
    /// (both without a request), otherwise the backend failure.
    pub async fn grant_admin(&self, target_uid: &str) -> Result<String, ApiError> {
        let uid = required(target_uid, "User UID is required.")?;
        let credential = self.admin_credential()?;
        self.backend.set_admin_claim(&credential, &uid).await.inspect_err(|err| {
            warn!("set admin claim for {uid} failed: {err}");
        })?;
        Ok(elevation_confirmation(&uid))
    }

    /// Send a custom push notification to `target_uid`.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty uid or message, `Forbidden` without an admin
    /// session, otherwise the backend failure.
    pub async fn notify_user(&self, target_uid: &str, message: &str) -> Result<String, ApiError> {
        let uid = required(target_uid, "Target user is required.")?;
        let message = required(message, "Notification message is required.")?;
        let credential = self.admin_credential()?;
        self.backend
            .send_notification(&credential, &uid, &message)
            .await
            .inspect_err(|err| warn!("notification to {uid} failed: {err}"))?;
        Ok(format!("Notification successfully sent to user: {uid}"))
    }

    /// Fetch the admin dashboard text.
    ///
    /// # Errors
    ///
    /// `Forbidden` without an admin session, otherwise the backend failure.
    pub async fn dashboard(&self) -> Result<String, ApiError> {
        let credential = self.admin_credential()?;
        self.backend
            .fetch_dashboard(&credential)
            .await
            .inspect_err(|err| warn!("admin dashboard fetch failed: {err}"))
    }

    fn admin_credential(&self) -> Result<String, ApiError> {
        let state = self.session.snapshot();
        if state.role() != Some(Role::Admin) {
            return Err(ApiError::Forbidden("Admin session required.".to_owned()));
        }
        state
            .credential()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Forbidden("Not authenticated or not an admin.".to_owned()))
    }
}

fn required(raw: &str, message: &str) -> Result<String, ApiError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ApiError::Validation(message.to_owned()));
    }
    Ok(value.to_owned())
}

/// Confirmation text for a successful role elevation.
#[must_use]
pub fn elevation_confirmation(uid: &str) -> String {
    format!("Successfully set admin claim for UID: {uid}. User's tokens revoked. They need to log in again.")
}
