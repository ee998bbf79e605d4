//! Collaborator seams for the remote identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` and `AdminConsole` only see these traits. The browser build
//! plugs in `net::api::HttpBackend` and `net::platform::HttpIdentityPlatform`;
//! tests plug in scripted fakes.
//!
//! Futures are `?Send`: in the browser everything runs on the single UI event
//! loop via `spawn_local`.

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Credentials, IdentityRecord, LoginPortal};
use crate::state::session::Principal;
use crate::util::listeners::Subscription;

/// Credential exchange and sign-out. No retry or caching.
#[async_trait(?Send)]
pub trait IdentityBackend: Send + Sync {
    /// Exchange credentials for an identity + bearer credential.
    async fn login(&self, portal: LoginPortal, credentials: &Credentials) -> Result<IdentityRecord, ApiError>;

    /// Ask the backend to end `principal`'s session.
    async fn sign_out(&self, principal: &Principal) -> Result<(), ApiError>;
}

/// Privileged operations. Every call carries the caller's bearer credential;
/// the backend is expected to reject non-admin callers on its own.
#[async_trait(?Send)]
pub trait AdminBackend: Send + Sync {
    /// Grant admin claims to `uid`. Returns the backend acknowledgement text.
    async fn set_admin_claim(&self, credential: &str, uid: &str) -> Result<String, ApiError>;

    /// Push `message` to `target_uid`. Returns the backend acknowledgement text.
    async fn send_notification(&self, credential: &str, target_uid: &str, message: &str)
    -> Result<String, ApiError>;

    /// Fetch the admin dashboard text payload.
    async fn fetch_dashboard(&self, credential: &str) -> Result<String, ApiError>;
}

/// Callback receiving the identity platform's current identity (`None` = signed out).
pub type IdentityListener = Box<dyn Fn(Option<&IdentityRecord>) + Send + Sync>;

/// Push-style "current identity changed" notifications.
pub trait IdentityPlatform: Send + Sync {
    /// Register `listener`. The platform delivers at least one notification
    /// after subscribing; the handle unregisters on drop.
    fn subscribe(&self, listener: IdentityListener) -> Subscription;
}
