//! Tab selection state.

use std::cell::RefCell;
use std::rc::Rc;

use super::context::{self, ContextError};
use super::controllable::{Controllable, PendingChange};
use super::events::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TabEntry {
    value: String,
    disabled: bool,
}

/// Selected tab plus the ordered list of registered tabs.
#[derive(Debug)]
pub struct TabsState {
    tabs: Vec<TabEntry>,
    selected: Controllable<String>,
}

impl TabsState {
    pub fn new(selected: Controllable<String>) -> Self {
        Self {
            tabs: Vec::new(),
            selected,
        }
    }

    /// Adds a tab. Registering an existing value updates its disabled flag.
    pub fn register(&mut self, value: &str, disabled: bool) {
        match self.tabs.iter_mut().find(|tab| tab.value == value) {
            Some(tab) => tab.disabled = disabled,
            None => self.tabs.push(TabEntry {
                value: value.to_string(),
                disabled,
            }),
        }
    }

    pub fn selected(&self) -> &str {
        self.selected.value()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.value() == value
    }

    pub fn tab_values(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.value.as_str())
    }

    /// Selects `value` unless it is unknown, disabled or already selected.
    pub fn select(&mut self, value: &str) -> Option<PendingChange<String>> {
        let selectable = self
            .tabs
            .iter()
            .any(|tab| tab.value == value && !tab.disabled);
        if selectable && !self.is_selected(value) {
            self.selected.apply(value.to_string())
        } else {
            None
        }
    }

    /// Whether tabs respond to `key` at all.
    pub fn handles(key: Key) -> bool {
        matches!(
            key,
            Key::ArrowRight | Key::ArrowDown | Key::ArrowLeft | Key::ArrowUp | Key::Home | Key::End
        )
    }

    /// Arrow keys move to the neighbouring enabled tab, wrapping around;
    /// Home and End jump to the first and last enabled tab.
    pub fn handle_key(&mut self, key: Key) -> Option<PendingChange<String>> {
        let target = match key {
            Key::ArrowRight | Key::ArrowDown => self.step(1),
            Key::ArrowLeft | Key::ArrowUp => self.step(-1),
            Key::Home => self.enabled().next(),
            Key::End => self.enabled().last(),
            _ => None,
        }?;
        self.select(&target)
    }

    fn enabled(&self) -> impl DoubleEndedIterator<Item = String> + '_ {
        self.tabs
            .iter()
            .filter(|tab| !tab.disabled)
            .map(|tab| tab.value.clone())
    }

    fn step(&self, direction: isize) -> Option<String> {
        let count = self.tabs.len() as isize;
        if count == 0 {
            return None;
        }

        let start = self
            .tabs
            .iter()
            .position(|tab| self.is_selected(&tab.value))
            .map(|index| index as isize)
            .unwrap_or(if direction > 0 { -1 } else { count });

        (1..=count)
            .map(|offset| (start + direction * offset).rem_euclid(count) as usize)
            .map(|index| &self.tabs[index])
            .find(|tab| !tab.disabled)
            .map(|tab| tab.value.clone())
    }

    pub fn sync(&mut self, selected: Option<String>) {
        self.selected.sync(selected);
    }
}

/// Shared tabs state that triggers and panels bind to.
#[derive(Debug, Clone)]
pub struct TabsHandle(Rc<RefCell<TabsState>>);

impl TabsHandle {
    pub fn new(state: TabsState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn scope<R>(&self, build: impl FnOnce() -> R) -> R {
        context::provide(self.clone(), build)
    }

    pub fn selected(&self) -> String {
        self.0.borrow().selected().to_string()
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
        if !TabsState::handles(key) {
            return false;
        }
        let change = self.0.borrow_mut().handle_key(key);
        if let Some(change) = change {
            change.notify();
        }
        true
    }

    pub fn sync(&self, selected: Option<String>) {
        self.0.borrow_mut().sync(selected);
    }
}

/// The clickable label of one tab.
#[derive(Debug, Clone)]
pub struct TabTrigger {
    value: String,
    disabled: bool,
    tabs: TabsHandle,
}

impl TabTrigger {
    /// Registers a tab with the tabs in scope.
    pub fn new(value: impl Into<String>) -> Result<Self, ContextError> {
        Self::with_disabled(value, false)
    }

    pub fn with_disabled(value: impl Into<String>, disabled: bool) -> Result<Self, ContextError> {
        let tabs = context::use_context::<TabsHandle>("TabTrigger")?;
        let value = value.into();
        tabs.0.borrow_mut().register(&value, disabled);
        Ok(Self {
            value,
            disabled,
            tabs,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.tabs.is_selected(&self.value)
    }

    pub fn activate(&self) {
        self.tabs.select(&self.value);
    }
}

/// Content shown while its tab is selected.
#[derive(Debug, Clone)]
pub struct TabPanel {
    value: String,
    tabs: TabsHandle,
}

impl TabPanel {
    pub fn new(value: impl Into<String>) -> Result<Self, ContextError> {
        Ok(Self {
            value: value.into(),
            tabs: context::use_context::<TabsHandle>("TabPanel")?,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_visible(&self) -> bool {
        self.tabs.is_selected(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(selected: Controllable<String>) -> (TabsHandle, Vec<TabTrigger>) {
        let handle = TabsHandle::new(TabsState::new(selected));
        let triggers = handle
            .scope(|| -> Result<Vec<_>, ContextError> {
                Ok(vec![
                    TabTrigger::new("one")?,
                    TabTrigger::with_disabled("two", true)?,
                    TabTrigger::new("three")?,
                ])
            })
            .unwrap();
        (handle, triggers)
    }

    #[test]
    fn activating_trigger_selects_tab() {
        let (handle, triggers) = tabs(Controllable::uncontrolled("one".to_string()));
        triggers[2].activate();
        assert_eq!(handle.selected(), "three");
        assert!(triggers[2].is_selected());
    }

    #[test]
    fn disabled_tab_cannot_be_selected() {
        let (handle, triggers) = tabs(Controllable::uncontrolled("one".to_string()));
        triggers[1].activate();
        assert_eq!(handle.selected(), "one");
    }

    #[test]
    fn arrow_keys_skip_disabled_and_wrap() {
        let (handle, _triggers) = tabs(Controllable::uncontrolled("one".to_string()));

        assert!(handle.handle_key(Key::ArrowRight));
        assert_eq!(handle.selected(), "three");

        handle.handle_key(Key::ArrowRight);
        assert_eq!(handle.selected(), "one");

        handle.handle_key(Key::ArrowLeft);
        assert_eq!(handle.selected(), "three");
    }

    #[test]
    fn home_and_end_jump_to_edges() {
        let (handle, _triggers) = tabs(Controllable::uncontrolled("one".to_string()));
        handle.handle_key(Key::End);
        assert_eq!(handle.selected(), "three");
        handle.handle_key(Key::Home);
        assert_eq!(handle.selected(), "one");
    }

    #[test]
    fn unrelated_keys_are_not_handled() {
        let (handle, _triggers) = tabs(Controllable::uncontrolled("one".to_string()));
        assert!(!handle.handle_key(Key::Char('x')));
    }

    #[test]
    fn panel_follows_selection() {
        let (handle, triggers) = tabs(Controllable::uncontrolled("one".to_string()));
        let panel = handle.scope(|| TabPanel::new("three")).unwrap();

        assert!(!panel.is_visible());
        triggers[2].activate();
        assert!(panel.is_visible());
    }

    #[test]
    fn controlled_tabs_wait_for_sync() {
        let (handle, triggers) = tabs(Controllable::controlled("one".to_string()));

        triggers[2].activate();
        assert_eq!(handle.selected(), "one");

        handle.sync(Some("three".to_string()));
        assert_eq!(handle.selected(), "three");
    }

    #[test]
    fn panel_outside_tabs_is_an_error() {
        let err = TabPanel::new("lost").unwrap_err();
        assert_eq!(err.to_string(), "TabPanel must be used within Tabs");
    }
}
