//! Session state store: the single writer of `SessionState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `app::App`, shared through `AppContext`. Pages call
//! `login` / `logout`; the identity platform pushes ambient changes through
//! the subscription installed by `initialize`. Every applied transition is
//! broadcast synchronously to subscribers (the UI mirrors it into a signal).
//!
//! ORDERING
//! ========
//! Each `login` / `logout` takes a generation number when it is issued. A
//! completion applies only if its generation is newer than the last applied
//! one, so a slow `login` cannot overwrite a `logout` issued after it.
//! Ambient pushes apply as they arrive.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::future::Future;
use std::sync::Arc;

use leptos::logging::{log, warn};
use parking_lot::Mutex;

use super::session::{Principal, SessionState};
use crate::net::backend::{IdentityBackend, IdentityPlatform};
use crate::net::error::ApiError;
use crate::net::types::{Credentials, IdentityRecord, LoginPortal};
use crate::util::listeners::{ListenerSet, Subscription};

struct Inner {
    state: SessionState,
    /// Generation handed to the most recently issued operation.
    issued: u64,
    /// Generation of the most recently applied completion.
    applied: u64,
}

pub struct SessionStore {
    inner: Mutex<Inner>,
    listeners: ListenerSet<SessionState>,
    backend: Arc<dyn IdentityBackend>,
    ambient: Mutex<Option<Subscription>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn IdentityBackend>) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(Inner { state: SessionState::pending(), issued: 0, applied: 0 }),
            listeners: ListenerSet::new(),
            backend,
            ambient: Mutex::new(None),
        })
    }

    /// Consistent copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.lock().state.clone()
    }

    /// Observe every applied transition. Called synchronously, after the
    /// store lock is released, with the new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Subscribe to the identity platform's ambient notifications.
    ///
    /// Returns `false` (and does nothing) if already subscribed. The first
    /// notification marks the session ready.
    pub fn initialize(self: &Arc<Self>, platform: &dyn IdentityPlatform) -> bool {
        if self.ambient.lock().is_some() {
            return false;
        }
        let weak = Arc::downgrade(self);
        let handle = platform.subscribe(Box::new(move |record: Option<&IdentityRecord>| {
            if let Some(store) = weak.upgrade() {
                store.apply_ambient(record);
            }
        }));

        let mut slot = self.ambient.lock();
        if slot.is_some() {
            // A re-entrant initialize won; ours is released on drop.
            return false;
        }
        *slot = Some(handle);
        true
    }

    /// Release the ambient subscription. Safe to call repeatedly.
    pub fn teardown(&self) {
        let handle = self.ambient.lock().take();
        drop(handle);
    }

    /// Issue a login. The generation is taken now, not when the future is
    /// first polled.
    ///
    /// On failure the session is left untouched and the error is returned.
    /// An identity with an unrecognized role forces a sign-out and returns
    /// [`ApiError::UnrecognizedRole`]. A completion overtaken by a newer
    /// operation returns [`ApiError::Superseded`].
    pub fn login(
        self: &Arc<Self>,
        portal: LoginPortal,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Principal, ApiError>> + 'static {
        let generation = self.issue();
        let store = Arc::clone(self);
        async move {
            let record = store.backend.login(portal, &credentials).await.inspect_err(|err| {
                warn!("login failed for {}: {err}", credentials.email);
            })?;
            store.finish_login(generation, &record)
        }
    }

    /// Issue a logout. Best-effort: backend failures are logged and the local
    /// session is cleared regardless.
    pub fn logout(self: &Arc<Self>) -> impl Future<Output = ()> + 'static {
        let generation = self.issue();
        let principal = self.snapshot().principal().cloned();
        let store = Arc::clone(self);
        async move {
            if let Some(principal) = principal.filter(|p| p.identity().is_some()) {
                if let Err(err) = store.backend.sign_out(&principal).await {
                    warn!("sign-out request failed, clearing local session anyway: {err}");
                }
            }
            store.finish_logout(generation);
        }
    }

    fn issue(&self) -> u64 {
        let mut inner = self.inner.lock();
        inner.issued += 1;
        inner.issued
    }

    fn finish_login(&self, generation: u64, record: &IdentityRecord) -> Result<Principal, ApiError> {
        self.transition(|inner| {
            if generation <= inner.applied {
                log!("discarding stale login completion (generation {generation})");
                return Err(ApiError::Superseded);
            }
            inner.applied = generation;
            match Principal::from_record(record) {
                Ok(principal) => {
                    inner.state.set_principal(principal.clone(), record.token.clone());
                    Ok(principal)
                }
                Err(err) => {
                    warn!("forced sign-out for {}: {err}", record.uid);
                    inner.state.clear();
                    inner.applied = inner.issued;
                    Err(err)
                }
            }
        })
    }

    fn finish_logout(&self, generation: u64) {
        self.transition(|inner| {
            if generation <= inner.applied {
                log!("discarding stale logout completion (generation {generation})");
                return;
            }
            inner.applied = generation;
            // Before the first ambient notification there is nothing to clear.
            if inner.state.ready() {
                inner.state.clear();
            }
        });
    }

    fn apply_ambient(&self, record: Option<&IdentityRecord>) {
        self.transition(|inner| {
            if let Err(err) = inner.state.apply_record(record) {
                warn!("forced sign-out from identity platform: {err}");
                inner.applied = inner.issued;
            }
        });
    }

    /// Run `apply` under the lock, then notify listeners if the state changed.
    fn transition<R>(&self, apply: impl FnOnce(&mut Inner) -> R) -> R {
        let (result, changed) = {
            let mut inner = self.inner.lock();
            let before = inner.state.clone();
            let result = apply(&mut inner);
            let changed = (inner.state != before).then(|| inner.state.clone());
            (result, changed)
        };
        if let Some(snapshot) = changed {
            self.listeners.notify(&snapshot);
        }
        result
    }
}
