//! Controlled/uncontrolled value ownership.
//!
//! Every stateful component holds its current value in a [`Controllable`].
//! The mode is fixed at construction:
//!
//! - **Controlled**: the caller supplied a value. The component never keeps
//!   its own copy of the next value; interactions only report the requested
//!   change and wait for the caller to [`sync`](Controllable::sync) it back.
//! - **Uncontrolled**: the component was seeded from a default. Interactions
//!   update the stored value directly and also report the change.

use std::fmt;
use std::rc::Rc;

/// Callback invoked with the value an interaction asks for.
pub type ChangeHandler<T> = Rc<dyn Fn(&T)>;

/// A change that has been applied but not yet reported.
///
/// Shared state hands this back out of its borrow so the change handler
/// can read or [`sync`](Controllable::sync) the same state.
#[must_use = "the change handler only runs on notify"]
pub struct PendingChange<T> {
    handler: ChangeHandler<T>,
    value: T,
}

impl<T> PendingChange<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn notify(self) {
        (self.handler)(&self.value);
    }
}

impl<T: fmt::Debug> fmt::Debug for PendingChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingChange")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Controlled,
    Uncontrolled,
}

pub struct Controllable<T> {
    mode: Mode,
    value: T,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: Clone> Controllable<T> {
    /// Picks the mode from whether `value` was supplied.
    pub fn new(value: Option<T>, default: T) -> Self {
        match value {
            Some(value) => Self::controlled(value),
            None => Self::uncontrolled(default),
        }
    }

    pub fn controlled(value: T) -> Self {
        Self {
            mode: Mode::Controlled,
            value,
            on_change: None,
        }
    }

    pub fn uncontrolled(default: T) -> Self {
        Self {
            mode: Mode::Uncontrolled,
            value: default,
            on_change: None,
        }
    }

    /// Sets the change handler.
    #[must_use]
    pub fn on_change(mut self, handler: impl Fn(&T) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn set_on_change(&mut self, handler: impl Fn(&T) + 'static) {
        self.on_change = Some(Rc::new(handler));
    }

    /// The value currently displayed.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_controlled(&self) -> bool {
        self.mode == Mode::Controlled
    }

    /// Applies an interaction and notifies the change handler.
    pub fn set(&mut self, next: T) {
        if let Some(change) = self.apply(next) {
            change.notify();
        }
    }

    /// Applies an interaction without notifying.
    ///
    /// A caller that holds a borrow on the owning state releases it before
    /// calling [`PendingChange::notify`].
    pub fn apply(&mut self, next: T) -> Option<PendingChange<T>> {
        if self.mode == Mode::Uncontrolled {
            self.value = next.clone();
        }
        self.on_change.clone().map(|handler| PendingChange {
            handler,
            value: next,
        })
    }

    /// Feeds the caller's value back in after a render.
    ///
    /// `external` must keep the presence it had at construction. Switching
    /// between controlled and uncontrolled is unsupported: debug builds
    /// panic, release builds ignore the switch.
    pub fn sync(&mut self, external: Option<T>) {
        debug_assert!(
            external.is_some() == self.is_controlled(),
            "component switched between controlled and uncontrolled after mount"
        );

        if let (Mode::Controlled, Some(value)) = (self.mode, external) {
            self.value = value;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Controllable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controllable")
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
