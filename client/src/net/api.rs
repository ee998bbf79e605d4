//! REST client for the identity backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call fails with
//! `ApiError::not_in_browser()` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors become `NetworkUnavailable`; non-2xx responses go through
//! `ApiError::from_response`; undecodable success bodies are `Unexpected`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::backend::{AdminBackend, IdentityBackend};
use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::{NotificationRequest, UidRequest};
use super::types::{Credentials, IdentityRecord, LoginPortal};
use crate::state::session::Principal;

pub const CURRENT_IDENTITY_PATH: &str = "/api/auth/me";
pub const ADMIN_LOGOUT_PATH: &str = "/api/auth/logout/admin";
pub const SET_ADMIN_CLAIM_PATH: &str = "/auth/set-admin-claim";
pub const SEND_NOTIFICATION_PATH: &str = "/notifications/send-custom-notification";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Login endpoint for `portal`.
#[must_use]
pub fn login_path(portal: LoginPortal) -> &'static str {
    match portal {
        LoginPortal::User => "/api/auth/login/user",
        LoginPortal::Admin => "/api/auth/login/admin",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(credential: &str) -> String {
    format!("Bearer {credential}")
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_identity(status: u16, body: &str) -> Result<IdentityRecord, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Unexpected {
        status,
        message: format!("malformed identity payload: {e}"),
    })
}

/// Map a finished response into the body text or a classified failure.
#[cfg(any(test, feature = "hydrate"))]
fn into_body(ok: bool, status: u16, body: String) -> Result<String, ApiError> {
    if ok { Ok(body) } else { Err(ApiError::from_response(status, &body)) }
}

/// Decode a finished login or session response, keeping its real status.
#[cfg(any(test, feature = "hydrate"))]
fn identity_from_response(ok: bool, status: u16, body: String) -> Result<IdentityRecord, ApiError> {
    let body = into_body(ok, status, body)?;
    decode_identity(status, &body)
}

/// `gloo-net` + `fetch` backed implementation of the backend traits.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    /// `base` is prefixed to every path; empty means same origin.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<(bool, u16, String), ApiError> {
    let request = request.map_err(|e| ApiError::Unexpected { status: 0, message: e.to_string() })?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Unexpected { status, message: e.to_string() })?;
    Ok((resp.ok(), status, body))
}

#[cfg(feature = "hydrate")]
async fn send_for_body(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<String, ApiError> {
    let (ok, status, body) = send(request).await?;
    into_body(ok, status, body)
}

/// Fetch the identity bound to the browser session, if any.
#[cfg(feature = "hydrate")]
pub(crate) async fn fetch_current_identity(url: &str) -> Result<Option<IdentityRecord>, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;
    let status = resp.status();
    if status == 401 || status == 404 {
        return Ok(None);
    }
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Unexpected { status, message: e.to_string() })?;
    identity_from_response(resp.ok(), status, body).map(Some)
}

#[async_trait(?Send)]
impl IdentityBackend for HttpBackend {
    async fn login(&self, portal: LoginPortal, credentials: &Credentials) -> Result<IdentityRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(login_path(portal))).json(credentials);
            let (ok, status, body) = send(request).await?;
            identity_from_response(ok, status, body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (portal, credentials);
            Err(ApiError::not_in_browser())
        }
    }

    /// Admins are signed out server-side; plain users have no backend
    /// session endpoint, so their sign-out is purely local.
    async fn sign_out(&self, principal: &Principal) -> Result<(), ApiError> {
        let Principal::Admin(identity) = principal else {
            return Ok(());
        };
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(ADMIN_LOGOUT_PATH))
                .json(&UidRequest { uid: &identity.uid });
            send_for_body(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
            Err(ApiError::not_in_browser())
        }
    }
}

#[async_trait(?Send)]
impl AdminBackend for HttpBackend {
    async fn set_admin_claim(&self, credential: &str, uid: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(SET_ADMIN_CLAIM_PATH))
                .header("Authorization", &bearer(credential))
                .json(&UidRequest { uid });
            send_for_body(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, uid);
            Err(ApiError::not_in_browser())
        }
    }

    async fn send_notification(
        &self,
        credential: &str,
        target_uid: &str,
        message: &str,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(SEND_NOTIFICATION_PATH))
                .header("Authorization", &bearer(credential))
                .json(&NotificationRequest { target_uid, message });
            send_for_body(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, target_uid, message);
            Err(ApiError::not_in_browser())
        }
    }

    async fn fetch_dashboard(&self, credential: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.url(ADMIN_DASHBOARD_PATH))
                .header("Authorization", &bearer(credential))
                .build();
            send_for_body(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
            Err(ApiError::not_in_browser())
        }
    }
}
