use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;
use parking_lot::Mutex;

use super::*;
use crate::state::store::SessionStore;
use crate::test_support::{ScriptedBackend, creds, record};

fn counting_listener(seen: &Arc<Mutex<Vec<Option<String>>>>) -> IdentityListener {
    let seen = Arc::clone(seen);
    Box::new(move |record: Option<&IdentityRecord>| {
        seen.lock().push(record.map(|r| r.uid.clone()));
    })
}

#[test]
fn subscribe_before_publish_waits_for_value() {
    let platform = HttpIdentityPlatform::new("/api/auth/me");
    let seen = Arc::new(Mutex::new(Vec::new()));

    let _sub = platform.subscribe(counting_listener(&seen));
    assert!(seen.lock().is_empty());

    platform.publish(Some(record("u1", "user", None)));
    assert_eq!(*seen.lock(), vec![Some("u1".to_owned())]);
}

#[test]
fn late_subscriber_gets_no_replay() {
    let platform = HttpIdentityPlatform::new("/api/auth/me");
    platform.publish(Some(record("u1", "user", None)));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let _sub = platform.subscribe(counting_listener(&seen));

    assert!(seen.lock().is_empty());
}

#[test]
fn dropped_subscription_stops_notifications() {
    let platform = HttpIdentityPlatform::new("/api/auth/me");
    let calls = Arc::new(AtomicUsize::new(0));
    let sub = {
        let calls = Arc::clone(&calls);
        platform.subscribe(Box::new(move |_: Option<&IdentityRecord>| {
            calls.fetch_add(1, Ordering::SeqCst);
        }))
    };

    platform.publish(None);
    drop(sub);
    platform.publish(Some(record("u1", "user", None)));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_subscribers() {
    let platform = HttpIdentityPlatform::new("/api/auth/me");
    let other = platform.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let _sub = platform.subscribe(counting_listener(&seen));

    other.publish(Some(record("a1", "admin", Some("t"))));

    assert_eq!(*seen.lock(), vec![Some("a1".to_owned())]);
}

#[test]
fn drives_session_store_ready() {
    let store = SessionStore::new(ScriptedBackend::new());
    let platform = HttpIdentityPlatform::new("/api/auth/me");

    assert!(store.initialize(&platform));
    assert!(!store.snapshot().ready());

    platform.publish(Some(record("u1", "user", Some("t1"))));

    let state = store.snapshot();
    assert!(state.is_signed_in());
    assert_eq!(state.credential(), Some("t1"));
}

#[test]
fn logout_survives_resubscribe() {
    let store = SessionStore::new(ScriptedBackend::new());
    let platform = HttpIdentityPlatform::new("/api/auth/me");
    store.initialize(&platform);
    platform.publish(Some(record("a1", "admin", Some("t1"))));

    block_on(store.logout());
    store.teardown();
    store.initialize(&platform);

    let state = store.snapshot();
    assert!(!state.is_signed_in());
    assert_eq!(state.credential(), None);
}

#[test]
fn login_survives_resubscribe() {
    let backend = ScriptedBackend::new();
    let store = SessionStore::new(backend.clone());
    let platform = HttpIdentityPlatform::new("/api/auth/me");
    store.initialize(&platform);
    platform.publish(None);

    backend.queue_login(Ok(record("u1", "user", Some("t2"))));
    block_on(store.login(crate::net::types::LoginPortal::User, creds())).unwrap();
    store.teardown();
    store.initialize(&platform);

    let state = store.snapshot();
    assert!(state.is_signed_in());
    assert_eq!(state.credential(), Some("t2"));
}
