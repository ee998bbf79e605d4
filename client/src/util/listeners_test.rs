use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counter() -> (Arc<AtomicUsize>, impl Fn(&u32) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    (count, move |_: &u32| {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn notify_reaches_every_subscriber() {
    let set = ListenerSet::<u32>::new();
    let (a, cb_a) = counter();
    let (b, cb_b) = counter();
    let _sa = set.subscribe(cb_a);
    let _sb = set.subscribe(cb_b);

    set.notify(&7);

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_handle_unregisters() {
    let set = ListenerSet::<u32>::new();
    let (count, cb) = counter();
    let sub = set.subscribe(cb);
    assert_eq!(set.len(), 1);

    drop(sub);
    set.notify(&1);

    assert!(set.is_empty());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn release_only_removes_its_own_entry() {
    let set = ListenerSet::<u32>::new();
    let (a, cb_a) = counter();
    let (b, cb_b) = counter();
    let sa = set.subscribe(cb_a);
    let _sb = set.subscribe(cb_b);

    sa.release();
    set.notify(&1);

    assert_eq!(set.len(), 1);
    assert_eq!(a.load(Ordering::SeqCst), 0);
    assert_eq!(b.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_outliving_registry_is_harmless() {
    let set = ListenerSet::<u32>::new();
    let (_count, cb) = counter();
    let sub = set.subscribe(cb);
    drop(set);
    drop(sub);
}

#[test]
fn callback_may_subscribe_during_notify() {
    let set = ListenerSet::<u32>::new();
    let nested = set.clone();
    let held = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let held_cb = Arc::clone(&held);
    let _sub = set.subscribe(move |_| {
        held_cb.lock().push(nested.subscribe(|_| {}));
    });

    set.notify(&1);

    assert_eq!(set.len(), 2);
    assert_eq!(held.lock().len(), 1);
}
