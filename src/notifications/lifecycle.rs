//! Per-toast presentation lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::entry::{ToastEntry, ToastId};
use super::store::NotificationStore;
use super::timer::{TimerHandle, TimerHost};

/// Owns the auto-dismiss timer of one rendered toast.
///
/// Mounting arms a single timer if the toast has a non-zero duration; when
/// it expires the toast is removed from the store. [`close`](Self::close)
/// cancels the timer before removing. Expiry and close share one flag, so
/// the toast is removed at most once. Dropping the lifecycle cancels the
/// timer and leaves the store alone.
#[derive(Debug)]
pub struct ToastLifecycle {
    id: ToastId,
    store: NotificationStore,
    timer: Option<TimerHandle>,
    closed: Arc<AtomicBool>,
}

impl ToastLifecycle {
    pub fn mount(entry: &ToastEntry, store: &NotificationStore, timers: &dyn TimerHost) -> Self {
        let closed = Arc::new(AtomicBool::new(false));
        let timer = (!entry.is_persistent()).then(|| {
            let store = store.clone();
            let id = entry.id.clone();
            let closed = Arc::clone(&closed);
            timers.schedule(
                entry.duration,
                Box::new(move || {
                    if closed.swap(true, Ordering::SeqCst) {
                        return;
                    }
                    tracing::debug!(%id, "toast expired");
                    store.remove(&id);
                }),
            )
        });

        Self {
            id: entry.id.clone(),
            store: store.clone(),
            timer,
            closed,
        }
    }

    pub fn id(&self) -> &ToastId {
        &self.id
    }

    /// Whether an auto-dismiss timer is pending.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some() && !self.closed.load(Ordering::SeqCst)
    }

    pub fn close(&mut self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.store.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::entry::ToastOptions;
    use crate::notifications::timer::TimerCallback;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Records scheduled timers and fires them on demand.
    #[derive(Default)]
    struct ManualTimers {
        pending: Rc<RefCell<Vec<(Duration, Option<TimerCallback>)>>>,
        cancelled: Rc<RefCell<usize>>,
    }

    impl ManualTimers {
        fn fire_all(&self) {
            let callbacks: Vec<_> = self
                .pending
                .borrow_mut()
                .iter_mut()
                .filter_map(|(_, callback)| callback.take())
                .collect();
            for callback in callbacks {
                callback();
            }
        }
    }

    impl TimerHost for ManualTimers {
        fn schedule(&self, after: Duration, fire: TimerCallback) -> TimerHandle {
            self.pending.borrow_mut().push((after, Some(fire)));
            let index = self.pending.borrow().len() - 1;
            let pending = Rc::clone(&self.pending);
            let cancelled = Rc::clone(&self.cancelled);
            TimerHandle::new(move || {
                if pending.borrow_mut()[index].1.take().is_some() {
                    *cancelled.borrow_mut() += 1;
                }
            })
        }
    }

    fn mounted(
        options: ToastOptions,
        timers: &ManualTimers,
    ) -> (NotificationStore, ToastLifecycle) {
        let store = NotificationStore::new();
        store.show(options);
        let entry = store.snapshot()[0].clone();
        let lifecycle = ToastLifecycle::mount(&entry, &store, timers);
        (store, lifecycle)
    }

    #[test]
    fn arms_one_timer_for_entry_duration() {
        let timers = ManualTimers::default();
        let (_store, lifecycle) = mounted(
            ToastOptions::success("x").duration(Duration::from_secs(3)),
            &timers,
        );
        assert!(lifecycle.is_armed());
        assert_eq!(timers.pending.borrow().len(), 1);
        assert_eq!(timers.pending.borrow()[0].0, Duration::from_secs(3));
    }

    #[test]
    fn persistent_toast_arms_nothing() {
        let timers = ManualTimers::default();
        let (_store, lifecycle) = mounted(ToastOptions::success("x").persistent(), &timers);
        assert!(!lifecycle.is_armed());
        assert!(timers.pending.borrow().is_empty());
    }

    #[test]
    fn expiry_removes_entry() {
        let timers = ManualTimers::default();
        let (store, _lifecycle) = mounted(ToastOptions::warning("x"), &timers);
        timers.fire_all();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn close_cancels_then_removes_once() {
        let timers = ManualTimers::default();
        let (store, mut lifecycle) = mounted(ToastOptions::error("x"), &timers);
        let removals = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&removals);
        let _subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        lifecycle.close();
        lifecycle.close();

        assert_eq!(*timers.cancelled.borrow(), 1);
        assert!(store.snapshot().is_empty());
        assert_eq!(removals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn close_after_expiry_is_silent() {
        let timers = ManualTimers::default();
        let (store, mut lifecycle) = mounted(ToastOptions::neutral("x"), &timers);
        timers.fire_all();
        assert!(!lifecycle.is_armed());

        let notifications = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notifications);
        let _subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        lifecycle.close();

        assert_eq!(notifications.load(Ordering::SeqCst), 0);
        assert_eq!(*timers.cancelled.borrow(), 0);
    }

    #[test]
    fn unmount_cancels_without_removing() {
        let timers = ManualTimers::default();
        let (store, lifecycle) = mounted(ToastOptions::information("x"), &timers);

        drop(lifecycle);
        timers.fire_all();

        assert_eq!(*timers.cancelled.borrow(), 1);
        assert_eq!(store.snapshot().len(), 1);
    }
}
