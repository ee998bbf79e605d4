//! Callback registry with disposable subscription handles.
//!
//! DESIGN
//! ======
//! A `Subscription` owns the right to stay registered: dropping it (or calling
//! `release`) removes the callback. Components hold the handle for their
//! lifetime and release it in `on_cleanup`, so remounts never stack callbacks.
//! Callbacks run outside the registry lock, in registration order.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Shared set of callbacks notified with `&T`.
pub struct ListenerSet<T> {
    inner: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for ListenerSet<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: 'static> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ListenerSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Arc::new(Mutex::new(Registry { next_id: 0, entries: Vec::new() })) }
    }

    /// Register `callback`; it stays registered until the handle is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = self.inner.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Arc::new(callback)));
            id
        };
        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Call every registered callback with `value`.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Callback<T>> = self.inner.lock().entries.iter().map(|(_, cb)| Arc::clone(cb)).collect();
        for callback in snapshot {
            callback(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a registered callback. Releases on drop.
#[must_use = "dropping a Subscription unregisters its callback immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self { release: Some(Box::new(release)) }
    }

    /// Unregister now. Equivalent to dropping the handle.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}
