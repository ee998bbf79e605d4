//! Ambient identity source backed by the host's session endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every subscription fetches `GET /api/auth/me`. A 200 carries the browser
//! session's identity; any other outcome counts as signed out. The result is
//! delivered to all current subscribers. Earlier results are never replayed:
//! a store that signed in or out since then would be overwritten with a
//! stale identity. During SSR there is no browser session, so nothing is
//! fetched and the session stays pending until hydration.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use super::backend::{IdentityListener, IdentityPlatform};
use super::types::IdentityRecord;
use crate::util::listeners::{ListenerSet, Subscription};

#[derive(Clone)]
pub struct HttpIdentityPlatform {
    session_url: String,
    listeners: ListenerSet<Option<IdentityRecord>>,
}

impl HttpIdentityPlatform {
    #[must_use]
    pub fn new(session_url: impl Into<String>) -> Self {
        Self { session_url: session_url.into(), listeners: ListenerSet::new() }
    }

    /// Notify every subscriber that the current identity is `record`.
    pub fn publish(&self, record: Option<IdentityRecord>) {
        self.listeners.notify(&record);
    }

    #[cfg(feature = "hydrate")]
    fn start_lookup(&self) {
        let platform = self.clone();
        leptos::task::spawn_local(async move {
            let record = match super::api::fetch_current_identity(&platform.session_url).await {
                Ok(record) => record,
                Err(err) => {
                    leptos::logging::warn!("session lookup failed, treating as signed out: {err}");
                    None
                }
            };
            platform.publish(record);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn start_lookup(&self) {
        let _ = &self.session_url;
    }
}

impl IdentityPlatform for HttpIdentityPlatform {
    fn subscribe(&self, listener: IdentityListener) -> Subscription {
        let handle = self.listeners.subscribe(move |record: &Option<IdentityRecord>| listener(record.as_ref()));
        self.start_lookup();
        handle
    }
}
