//! Integration tests for the toast store and toast lifecycle.
//!
//! Each test builds its own store except `global_store_resets`, which is the
//! only test touching the process-wide instance.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::channel::mpsc;
use futures::StreamExt;
use kiln::notifications::{
    NotificationStore, StoreSnapshot, TokioTimers, ToastDefaults, ToastLifecycle, ToastOptions,
    ToastPosition, ToastVariant,
};
use pretty_assertions::assert_eq;

fn titles(store: &NotificationStore) -> Vec<String> {
    store
        .snapshot()
        .iter()
        .map(|entry| entry.title.clone().unwrap_or_default())
        .collect()
}

fn counter() -> (
    Arc<AtomicUsize>,
    impl Fn(&StoreSnapshot) + Clone + Send + Sync + 'static,
) {
    let calls = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&calls);
    (calls, move |_: &StoreSnapshot| {
        sink.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Store properties
// ============================================================================

#[test]
fn ids_are_pairwise_distinct() {
    let store = NotificationStore::new();

    let ids: Vec<_> = (0..500)
        .map(|i| store.show(ToastOptions::neutral(format!("toast {i}"))))
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn snapshot_keeps_call_order() {
    let store = NotificationStore::new();
    let expected: Vec<String> = (0..20).map(|i| format!("toast {i}")).collect();

    for (i, title) in expected.iter().enumerate() {
        let variant = ToastVariant::ALL[i % ToastVariant::ALL.len()];
        store.show(ToastOptions::new(variant).title(title.clone()));
    }

    assert_eq!(titles(&store), expected);
}

#[test]
fn remove_is_idempotent() {
    let store = NotificationStore::new();
    let first = store.success("first");
    store.success("second");

    store.remove(&first);
    let once = store.snapshot();
    store.remove(&first);
    let twice = store.snapshot();

    assert_eq!(once, twice);
    assert_eq!(titles(&store), vec!["second".to_string()]);
}

#[test]
fn removing_unknown_id_leaves_list_unchanged() {
    let store = NotificationStore::new();
    store.information("kept");
    let before = store.snapshot();

    store.remove(&"no-such-toast".into());

    assert_eq!(store.snapshot(), before);
}

#[test]
fn clear_empties_any_list() {
    let store = NotificationStore::new();
    store.clear();
    assert!(store.snapshot().is_empty());

    for _ in 0..7 {
        store.warning("careful");
    }
    store.clear();

    assert!(store.snapshot().is_empty());
}

#[test]
fn every_subscriber_hears_each_mutation_once() {
    let store = NotificationStore::new();
    let listeners: Vec<_> = (0..4).map(|_| counter()).collect();
    let _subscriptions: Vec<_> = listeners
        .iter()
        .map(|(_, listener)| store.subscribe(listener.clone()))
        .collect();

    let (removed_calls, removed_listener) = counter();
    store.subscribe(removed_listener).unsubscribe();

    store.success("saved");

    for (calls, _) in &listeners {
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
    assert_eq!(removed_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let store = NotificationStore::new();
    let (calls, listener) = counter();

    {
        let _subscription = store.subscribe(listener);
        store.neutral("one");
        assert_eq!(store.listener_count(), 1);
    }
    store.neutral("two");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn listeners_see_the_fresh_snapshot_and_may_read_the_store() {
    let store = NotificationStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let reader = store.clone();
    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(move |snapshot| {
        assert_eq!(snapshot.entries, reader.snapshot());
        sink.lock().unwrap().push(snapshot.entries.len());
    });

    let id = store.success("a");
    store.error("b");
    store.remove(&id);
    store.clear();

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1, 0]);
}

#[test]
fn snapshots_can_be_forwarded_over_a_channel() {
    let store = NotificationStore::new();
    let (tx, mut rx) = mpsc::unbounded();
    let _subscription = store.subscribe(move |snapshot| {
        let _ = tx.unbounded_send(snapshot.entries.len());
    });

    store.success("a");
    store.success("b");
    store.clear();

    let received = tokio_test::block_on(async {
        let mut received = Vec::new();
        for _ in 0..3 {
            received.extend(rx.next().await);
        }
        received
    });
    assert_eq!(received, vec![1, 2, 0]);
}

#[test]
fn store_is_shared_across_threads() {
    let store = NotificationStore::new();

    let handles: Vec<_> = (0..4)
        .map(|thread| {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    store.information(format!("{thread}-{i}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.snapshot().len(), 100);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn show_then_remove_round_trip() {
    let store = NotificationStore::new();

    let id = store.show(
        ToastOptions::new(ToastVariant::Success)
            .title("Saved")
            .duration(Duration::ZERO),
    );

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    let entry = &snapshot[0];
    assert_eq!(entry.id, id);
    assert_eq!(entry.variant, ToastVariant::Success);
    assert_eq!(entry.title.as_deref(), Some("Saved"));
    assert_eq!(entry.duration, Duration::ZERO);

    store.remove(&id);
    assert!(store.snapshot().is_empty());
}

#[test]
fn convenience_calls_append_in_order() {
    let store = NotificationStore::new();

    store.success("A");
    store.error("B");

    let snapshot = store.snapshot();
    assert_eq!(titles(&store), vec!["A".to_string(), "B".to_string()]);
    assert_eq!(snapshot[0].variant, ToastVariant::Success);
    assert_eq!(snapshot[1].variant, ToastVariant::Error);
}

#[test]
fn convenience_calls_forward_description_and_options() {
    let store = NotificationStore::new();

    store.warning_with(
        "Disk almost full",
        Some("2 GB left".to_string()),
        ToastOptions::error("ignored")
            .icon("bell")
            .persistent()
            .position(ToastPosition::TopLeft),
    );
    store.success_with("Uploaded", None, ToastOptions::default().description("3 files"));

    let snapshot = store.snapshot();
    let warning = &snapshot[0];
    assert_eq!(warning.variant, ToastVariant::Warning);
    assert_eq!(warning.title.as_deref(), Some("Disk almost full"));
    assert_eq!(warning.description.as_deref(), Some("2 GB left"));
    assert_eq!(warning.icon.as_deref(), Some("bell"));
    assert_eq!(warning.duration, Duration::ZERO);
    assert_eq!(warning.position, ToastPosition::TopLeft);

    assert_eq!(snapshot[1].variant, ToastVariant::Success);
    assert_eq!(snapshot[1].description.as_deref(), Some("3 files"));
    assert_eq!(snapshot[1].duration, Duration::from_millis(5000));
}

#[test]
fn global_position_applies_to_new_toasts() {
    let store = NotificationStore::new();

    store.set_position(ToastPosition::BottomLeft);
    store.show(ToastOptions::default());
    store.show(ToastOptions::neutral("pinned").position(ToastPosition::TopCenter));

    let snapshot = store.snapshot();
    assert_eq!(store.position(), ToastPosition::BottomLeft);
    assert_eq!(snapshot[0].position, ToastPosition::BottomLeft);
    assert_eq!(snapshot[1].position, ToastPosition::TopCenter);
}

#[test]
fn configured_defaults_fill_unset_options() {
    let store = NotificationStore::with_defaults(ToastDefaults {
        duration: Duration::from_secs(2),
        position: ToastPosition::TopRight,
    });

    store.neutral("hello");

    let entry = &store.snapshot()[0];
    assert_eq!(entry.duration, Duration::from_secs(2));
    assert_eq!(entry.position, ToastPosition::TopRight);
}

#[test]
fn global_store_resets() {
    let store = NotificationStore::global();
    let (calls, listener) = counter();
    let subscription = store.subscribe(listener);

    store.set_position(ToastPosition::MiddleLeft);
    store.success("global");
    assert!(!store.snapshot().is_empty());

    store.reset();

    assert!(store.snapshot().is_empty());
    assert_eq!(store.position(), ToastPosition::BottomRight);
    assert_eq!(store.listener_count(), 0);
    let before = calls.load(Ordering::SeqCst);
    store.success("after reset");
    assert_eq!(calls.load(Ordering::SeqCst), before);

    drop(subscription);
    store.reset();
}

// ============================================================================
// Auto-dismiss
// ============================================================================

#[tokio::test(start_paused = true)]
async fn toast_expires_after_its_duration() {
    let store = NotificationStore::new();
    let timers = TokioTimers::current().unwrap();
    let id = store.show(ToastOptions::success("saved").duration(Duration::from_millis(3000)));
    let entry = store.snapshot()[0].clone();

    let _lifecycle = ToastLifecycle::mount(&entry, &store, &timers);

    tokio::time::sleep(Duration::from_millis(2990)).await;
    assert!(store.snapshot().iter().any(|entry| entry.id == id));

    tokio::time::sleep(Duration::from_millis(20)).await;
    tokio::task::yield_now().await;
    assert!(store.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn default_duration_is_five_seconds() {
    let store = NotificationStore::new();
    let timers = TokioTimers::current().unwrap();
    store.information("hello");
    let entry = store.snapshot()[0].clone();
    let _lifecycle = ToastLifecycle::mount(&entry, &store, &timers);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert_eq!(store.snapshot().len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert!(store.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn zero_duration_never_expires() {
    let store = NotificationStore::new();
    let timers = TokioTimers::current().unwrap();
    store.show(ToastOptions::warning("sticky").persistent());
    let entry = store.snapshot()[0].clone();

    let lifecycle = ToastLifecycle::mount(&entry, &store, &timers);
    assert!(!lifecycle.is_armed());

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert_eq!(store.snapshot().len(), 1);

    store.clear();
    assert!(store.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn closing_early_cancels_the_timer() {
    let store = NotificationStore::new();
    let timers = TokioTimers::current().unwrap();
    store.success("a");
    let entry = store.snapshot()[0].clone();
    let mut lifecycle = ToastLifecycle::mount(&entry, &store, &timers);

    let (calls, listener) = counter();
    let _subscription = store.subscribe(listener);

    lifecycle.close();
    lifecycle.close();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(store.snapshot().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn unmounting_keeps_the_toast() {
    let store = NotificationStore::new();
    let timers = TokioTimers::current().unwrap();
    store.success("a");
    let entry = store.snapshot()[0].clone();

    drop(ToastLifecycle::mount(&entry, &store, &timers));
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(store.snapshot().len(), 1);
}
