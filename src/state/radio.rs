//! Radio group selection.

use std::cell::RefCell;
use std::rc::Rc;

use super::context::{self, ContextError};
use super::controllable::{Controllable, PendingChange};
use super::events::Key;

#[derive(Debug)]
pub struct RadioGroupState {
    selected: Controllable<Option<String>>,
    options: Vec<(String, bool)>,
    disabled: bool,
}

impl RadioGroupState {
    pub fn new(selected: Controllable<Option<String>>) -> Self {
        Self {
            selected,
            options: Vec::new(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn register(&mut self, value: &str, disabled: bool) {
        match self.options.iter_mut().find(|(v, _)| v == value) {
            Some(option) => option.1 = disabled,
            None => self.options.push((value.to_string(), disabled)),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.value().as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected() == Some(value)
    }

    fn is_enabled(&self, value: &str) -> bool {
        !self.disabled
            && self
                .options
                .iter()
                .any(|(v, disabled)| v == value && !disabled)
    }

    /// Selects `value` if it is a registered, enabled option.
    pub fn select(&mut self, value: &str) -> Option<PendingChange<Option<String>>> {
        if self.is_enabled(value) && !self.is_selected(value) {
            self.selected.apply(Some(value.to_string()))
        } else {
            None
        }
    }

    pub fn handles(key: Key) -> bool {
        matches!(key, Key::ArrowDown | Key::ArrowRight | Key::ArrowUp | Key::ArrowLeft)
    }

    /// Arrow keys move the selection to the next or previous enabled option.
    pub fn handle_key(&mut self, key: Key) -> Option<PendingChange<Option<String>>> {
        let forward = match key {
            Key::ArrowDown | Key::ArrowRight => true,
            Key::ArrowUp | Key::ArrowLeft => false,
            _ => return None,
        };

        let enabled: Vec<String> = self
            .options
            .iter()
            .filter(|(_, disabled)| !disabled)
            .map(|(value, _)| value.clone())
            .collect();
        if enabled.is_empty() {
            return None;
        }

        let index = self
            .selected()
            .and_then(|current| enabled.iter().position(|v| v == current));
        let next = match (index, forward) {
            (None, true) => 0,
            (None, false) => enabled.len() - 1,
            (Some(i), true) => (i + 1) % enabled.len(),
            (Some(i), false) => (i + enabled.len() - 1) % enabled.len(),
        };
        self.select(&enabled[next])
    }

    pub fn sync(&mut self, selected: Option<Option<String>>) {
        self.selected.sync(selected);
    }
}

#[derive(Debug, Clone)]
pub struct RadioGroupHandle(Rc<RefCell<RadioGroupState>>);

impl RadioGroupHandle {
    pub fn new(state: RadioGroupState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn scope<R>(&self, build: impl FnOnce() -> R) -> R {
        context::provide(self.clone(), build)
    }

    pub fn selected(&self) -> Option<String> {
        self.0.borrow().selected().map(str::to_string)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.0.borrow().is_selected(value)
    }

    pub fn select(&self, value: &str) {
        let change = self.0.borrow_mut().select(value);
        if let Some(change) = change {
            change.notify();
        }
    }

    /// Returns whether the key was handled.
    pub fn handle_key(&self, key: Key) -> bool {
        if !RadioGroupState::handles(key) {
            return false;
        }
        let change = self.0.borrow_mut().handle_key(key);
        if let Some(change) = change {
            change.notify();
        }
        true
    }

    pub fn sync(&self, selected: Option<Option<String>>) {
        self.0.borrow_mut().sync(selected);
    }
}

/// One option of the radio group in scope.
#[derive(Debug, Clone)]
pub struct Radio {
    value: String,
    disabled: bool,
    group: RadioGroupHandle,
}

impl Radio {
    pub fn new(value: impl Into<String>) -> Result<Self, ContextError> {
        Self::with_disabled(value, false)
    }

    pub fn with_disabled(value: impl Into<String>, disabled: bool) -> Result<Self, ContextError> {
        let group = context::use_context::<RadioGroupHandle>("Radio")?;
        let value = value.into();
        group.0.borrow_mut().register(&value, disabled);
        Ok(Self {
            value,
            disabled,
            group,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.group.is_selected(&self.value)
    }

    pub fn choose(&self) {
        self.group.select(&self.value);
    }
}
