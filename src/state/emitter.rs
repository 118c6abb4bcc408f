//! Observer plumbing shared by every stateful piece of the crate.
//!
//! An [`Emitter`] fans an event out to registered listeners. Registering
//! returns a [`Subscription`] guard; the listener stays registered exactly
//! as long as the guard lives.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Guard for a registered listener.
///
/// Dropping the guard (or calling [`Subscription::unsubscribe`]) removes the
/// listener. [`Subscription::detach`] keeps it registered for the lifetime of
/// its source instead.
#[must_use = "dropping a subscription unregisters its listener immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a guard that runs `unsubscribe` once when released.
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unregisters the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Leaves the listener registered for as long as its source lives.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

type Listener<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: usize,
    listeners: Vec<(usize, Listener<E>)>,
}

/// Single-threaded event fan-out.
///
/// Listeners run synchronously, in registration order. A listener may
/// unsubscribe itself or others while an event is being delivered; removed
/// listeners do not receive the rest of that delivery.
pub struct Emitter<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Emitter<E> {
    /// Creates an emitter with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a listener.
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry
                .listeners
                .push((id, Rc::new(RefCell::new(listener)) as Listener<E>));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    /// Delivers `event` to every current listener.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(usize, Listener<E>)> = self.registry.borrow().listeners.clone();

        for (id, listener) in snapshot {
            let still_registered = self
                .registry
                .borrow()
                .listeners
                .iter()
                .any(|(listener_id, _)| *listener_id == id);
            if !still_registered {
                continue;
            }

            // A listener that re-emits into itself is skipped for the nested event.
            if let Ok(mut callback) = listener.try_borrow_mut() {
                callback(event);
            }
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<E: 'static> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}
