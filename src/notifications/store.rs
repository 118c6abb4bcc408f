//! The toast list and its subscribers.
//!
//! [`NotificationStore`] owns the ordered list of active toasts and the
//! default position for new ones. Every mutation replaces the list with a
//! new snapshot and then calls each subscriber with it, synchronously and
//! in issuance order. The store owns no timers; auto-dismiss is driven by
//! [`ToastLifecycle`](super::lifecycle::ToastLifecycle).

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};

use super::entry::{
    ToastDefaults, ToastEntry, ToastId, ToastOptions, ToastPosition, ToastVariant,
};
use crate::state::emitter::Subscription;

/// What subscribers receive after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub entries: Arc<Vec<ToastEntry>>,
    /// Default position for toasts that do not pick one.
    pub position: ToastPosition,
}

type Listener = Arc<dyn Fn(&StoreSnapshot) + Send + Sync>;

struct StoreState {
    entries: Arc<Vec<ToastEntry>>,
    position: ToastPosition,
    defaults: ToastDefaults,
    next_listener: u64,
    listeners: Vec<(u64, Listener)>,
}

impl StoreState {
    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            entries: Arc::clone(&self.entries),
            position: self.position,
        }
    }
}

/// Shared handle to a toast list. Clones refer to the same list.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<Mutex<StoreState>>,
}

static GLOBAL: OnceLock<NotificationStore> = OnceLock::new();

impl NotificationStore {
    pub fn new() -> Self {
        Self::with_defaults(ToastDefaults::default())
    }

    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreState {
                entries: Arc::new(Vec::new()),
                position: defaults.position,
                defaults,
                next_listener: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// The process-wide store, created empty on first use.
    pub fn global() -> &'static NotificationStore {
        GLOBAL.get_or_init(NotificationStore::new)
    }

    /// Appends a toast and returns its id.
    pub fn show(&self, options: ToastOptions) -> ToastId {
        let id = ToastId::generate();
        let entry_id = id.clone();
        self.update(move |state| {
            let entry = ToastEntry::resolve(entry_id, options, &state.defaults, state.position);
            tracing::debug!(
                id = %entry.id,
                variant = %entry.variant,
                position = %entry.position,
                duration_ms = entry.duration.as_millis() as u64,
                "toast shown"
            );
            let mut entries = Vec::with_capacity(state.entries.len() + 1);
            entries.extend(state.entries.iter().cloned());
            entries.push(entry);
            state.entries = Arc::new(entries);
        });
        id
    }

    pub fn neutral(&self, title: impl Into<String>) -> ToastId {
        self.neutral_with(title, None, ToastOptions::default())
    }

    pub fn information(&self, title: impl Into<String>) -> ToastId {
        self.information_with(title, None, ToastOptions::default())
    }

    pub fn success(&self, title: impl Into<String>) -> ToastId {
        self.success_with(title, None, ToastOptions::default())
    }

    pub fn warning(&self, title: impl Into<String>) -> ToastId {
        self.warning_with(title, None, ToastOptions::default())
    }

    pub fn error(&self, title: impl Into<String>) -> ToastId {
        self.error_with(title, None, ToastOptions::default())
    }

    pub fn neutral_with(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show_variant(ToastVariant::Neutral, title.into(), description, options)
    }

    pub fn information_with(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show_variant(ToastVariant::Information, title.into(), description, options)
    }

    /// Shows a success toast. `options` supplies everything but the variant;
    /// `title` and a present `description` take precedence over its fields.
    pub fn success_with(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show_variant(ToastVariant::Success, title.into(), description, options)
    }

    pub fn warning_with(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show_variant(ToastVariant::Warning, title.into(), description, options)
    }

    pub fn error_with(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show_variant(ToastVariant::Error, title.into(), description, options)
    }

    fn show_variant(
        &self,
        variant: ToastVariant,
        title: String,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(ToastOptions {
            variant,
            title: Some(title),
            description: description.or(options.description),
            ..options
        })
    }

    /// Removes the toast with `id`. Unknown ids leave the list unchanged.
    pub fn remove(&self, id: &ToastId) {
        self.update(|state| {
            let entries: Vec<ToastEntry> = state
                .entries
                .iter()
                .filter(|entry| entry.id != *id)
                .cloned()
                .collect();
            tracing::debug!(%id, removed = entries.len() < state.entries.len(), "toast removed");
            state.entries = Arc::new(entries);
        });
    }

    pub fn clear(&self) {
        self.update(|state| {
            tracing::debug!(count = state.entries.len(), "toasts cleared");
            state.entries = Arc::new(Vec::new());
        });
    }

    /// Sets the position used by toasts shown from now on.
    pub fn set_position(&self, position: ToastPosition) {
        self.update(|state| {
            tracing::debug!(%position, "toast position changed");
            state.position = position;
        });
    }

    pub fn position(&self) -> ToastPosition {
        self.lock().position
    }

    pub fn snapshot(&self) -> Arc<Vec<ToastEntry>> {
        Arc::clone(&self.lock().entries)
    }

    pub fn defaults(&self) -> ToastDefaults {
        self.lock().defaults
    }

    /// Registers `listener` to run after every mutation.
    ///
    /// The listener may call back into the store; the store is unlocked
    /// while listeners run.
    pub fn subscribe(
        &self,
        listener: impl Fn(&StoreSnapshot) + Send + Sync + 'static,
    ) -> Subscription {
        let id = {
            let mut state = self.lock();
            let id = state.next_listener;
            state.next_listener += 1;
            state.listeners.push((id, Arc::new(listener)));
            id
        };

        let store: Weak<Mutex<StoreState>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(store) = store.upgrade() {
                let mut state = store.lock().unwrap_or_else(PoisonError::into_inner);
                state.listeners.retain(|(listener, _)| *listener != id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Empties the list, restores the configured default position and drops
    /// every subscriber. Meant for isolating tests that share
    /// [`NotificationStore::global`].
    pub fn reset(&self) {
        let mut state = self.lock();
        state.entries = Arc::new(Vec::new());
        state.position = state.defaults.position;
        state.listeners.clear();
    }

    fn update(&self, mutate: impl FnOnce(&mut StoreState)) {
        let (snapshot, listeners) = {
            let mut state = self.lock();
            mutate(&mut state);
            let listeners: Vec<Listener> = state
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (state.snapshot(), listeners)
        };

        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("NotificationStore")
            .field("entries", &state.entries.len())
            .field("position", &state.position)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn titles(store: &NotificationStore) -> Vec<String> {
        store
            .snapshot()
            .iter()
            .filter_map(|entry| entry.title.clone())
            .collect()
    }

    #[test]
    fn show_resolves_defaults() {
        let store = NotificationStore::new();
        let id = store.information("Heads up");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(snapshot[0].duration, Duration::from_millis(5000));
        assert_eq!(snapshot[0].position, ToastPosition::BottomRight);
    }

    #[test]
    fn configured_defaults_apply() {
        let store = NotificationStore::with_defaults(ToastDefaults {
            duration: Duration::from_secs(2),
            position: ToastPosition::TopCenter,
        });
        store.neutral("x");
        let entry = &store.snapshot()[0];
        assert_eq!(entry.duration, Duration::from_secs(2));
        assert_eq!(entry.position, ToastPosition::TopCenter);
    }

    #[test]
    fn old_snapshots_are_immutable() {
        let store = NotificationStore::new();
        store.success("A");
        let before = store.snapshot();
        store.success("B");
        assert_eq!(before.len(), 1);
        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn remove_of_unknown_id_is_noop() {
        let store = NotificationStore::new();
        store.success("kept");
        store.remove(&ToastId::from("missing"));
        assert_eq!(titles(&store), vec!["kept"]);
    }

    #[test]
    fn listeners_see_the_mutation_they_follow() {
        let store = NotificationStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = store.subscribe(move |snapshot| {
            sink.lock().unwrap().push(snapshot.entries.len());
        });

        let id = store.success("A");
        store.success("B");
        store.remove(&id);
        store.clear();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn listener_may_read_the_store() {
        let store = NotificationStore::new();
        let reader = store.clone();
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reads);
        let _subscription = store.subscribe(move |_| {
            counter.fetch_add(reader.snapshot().len(), Ordering::SeqCst);
        });

        store.warning("x");
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn set_position_notifies_with_new_position() {
        let store = NotificationStore::new();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _subscription = store.subscribe(move |snapshot| {
            *sink.lock().unwrap() = Some(snapshot.position);
        });

        store.set_position(ToastPosition::TopLeft);

        assert_eq!(*seen.lock().unwrap(), Some(ToastPosition::TopLeft));
        assert_eq!(store.position(), ToastPosition::TopLeft);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let store = NotificationStore::new();
        let subscription = store.subscribe(|_| {});
        assert_eq!(store.listener_count(), 1);
        drop(subscription);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let store = NotificationStore::new();
        store.set_position(ToastPosition::MiddleLeft);
        store.error("boom");
        store.subscribe(|_| {}).detach();

        store.reset();

        assert!(store.snapshot().is_empty());
        assert_eq!(store.position(), ToastPosition::BottomRight);
        assert_eq!(store.listener_count(), 0);
    }
}
