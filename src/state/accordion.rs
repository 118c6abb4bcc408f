//! Accordion expansion state.

use std::cell::RefCell;
use std::rc::Rc;

use super::context::{self, ContextError};
use super::controllable::{Controllable, PendingChange};

/// How many items may be expanded at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionKind {
    /// At most one item. With `collapsible`, the open item can be closed
    /// again, leaving none open.
    Single { collapsible: bool },
    Multiple,
}

#[derive(Debug)]
pub struct AccordionState {
    kind: AccordionKind,
    expanded: Controllable<Vec<String>>,
    disabled: bool,
}

impl AccordionState {
    pub fn new(kind: AccordionKind, expanded: Controllable<Vec<String>>) -> Self {
        Self {
            kind,
            expanded,
            disabled: false,
        }
    }

    pub fn single(expanded: Controllable<Vec<String>>) -> Self {
        Self::new(AccordionKind::Single { collapsible: true }, expanded)
    }

    pub fn multiple(expanded: Controllable<Vec<String>>) -> Self {
        Self::new(AccordionKind::Multiple, expanded)
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn kind(&self) -> AccordionKind {
        self.kind
    }

    pub fn expanded(&self) -> &[String] {
        self.expanded.value()
    }

    pub fn is_expanded(&self, value: &str) -> bool {
        self.expanded.value().iter().any(|v| v == value)
    }

    /// Opens or closes `value` according to the accordion kind.
    ///
    /// The returned change is reported once the caller releases the state.
    pub fn toggle(&mut self, value: &str) -> Option<PendingChange<Vec<String>>> {
        if self.disabled {
            return None;
        }

        let current = self.expanded.value();
        let open = current.iter().any(|v| v == value);
        let next = match (self.kind, open) {
            (AccordionKind::Single { collapsible: false }, true) => return None,
            (AccordionKind::Single { collapsible: true }, true) => Vec::new(),
            (AccordionKind::Single { .. }, false) => vec![value.to_string()],
            (AccordionKind::Multiple, true) => {
                current.iter().filter(|v| *v != value).cloned().collect()
            }
            (AccordionKind::Multiple, false) => {
                let mut next = current.clone();
                next.push(value.to_string());
                next
            }
        };

        self.expanded.apply(next)
    }

    pub fn sync(&mut self, expanded: Option<Vec<String>>) {
        self.expanded.sync(expanded);
    }
}

/// Shared accordion state that items bind to.
#[derive(Debug, Clone)]
pub struct AccordionHandle(Rc<RefCell<AccordionState>>);

impl AccordionHandle {
    pub fn new(state: AccordionState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    /// Builds the accordion's items with this accordion in scope.
    pub fn scope<R>(&self, build: impl FnOnce() -> R) -> R {
        context::provide(self.clone(), build)
    }

    pub fn is_expanded(&self, value: &str) -> bool {
        self.0.borrow().is_expanded(value)
    }

    pub fn toggle(&self, value: &str) {
        let change = self.0.borrow_mut().toggle(value);
        if let Some(change) = change {
            change.notify();
        }
    }

    pub fn sync(&self, expanded: Option<Vec<String>>) {
        self.0.borrow_mut().sync(expanded);
    }

    pub fn expanded(&self) -> Vec<String> {
        self.0.borrow().expanded().to_vec()
    }
}

/// One collapsible section, bound to the enclosing accordion.
#[derive(Debug, Clone)]
pub struct AccordionItem {
    value: String,
    accordion: AccordionHandle,
}

impl AccordionItem {
    /// Binds an item to the accordion in scope.
    pub fn new(value: impl Into<String>) -> Result<Self, ContextError> {
        Ok(Self {
            value: value.into(),
            accordion: context::use_context::<AccordionHandle>("AccordionItem")?,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_expanded(&self) -> bool {
        self.accordion.is_expanded(&self.value)
    }

    pub fn toggle(&self) {
        self.accordion.toggle(&self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(handle: &AccordionHandle) -> Vec<AccordionItem> {
        handle
            .scope(|| -> Result<Vec<_>, ContextError> {
                Ok(vec![
                    AccordionItem::new("a")?,
                    AccordionItem::new("b")?,
                    AccordionItem::new("c")?,
                ])
            })
            .unwrap()
    }

    #[test]
    fn single_keeps_one_open() {
        let handle = AccordionHandle::new(AccordionState::single(Controllable::uncontrolled(
            Vec::new(),
        )));
        let items = items(&handle);

        items[0].toggle();
        items[1].toggle();

        assert!(!items[0].is_expanded());
        assert!(items[1].is_expanded());
    }

    #[test]
    fn non_collapsible_single_cannot_close_last() {
        let handle = AccordionHandle::new(AccordionState::new(
            AccordionKind::Single { collapsible: false },
            Controllable::uncontrolled(vec!["a".to_string()]),
        ));
        let items = items(&handle);

        items[0].toggle();
        assert!(items[0].is_expanded());
    }

    #[test]
    fn multiple_toggles_independently() {
        let handle = AccordionHandle::new(AccordionState::multiple(Controllable::uncontrolled(
            Vec::new(),
        )));
        let items = items(&handle);

        items[0].toggle();
        items[2].toggle();
        assert_eq!(handle.expanded(), vec!["a".to_string(), "c".to_string()]);

        items[0].toggle();
        assert_eq!(handle.expanded(), vec!["c".to_string()]);
    }

    #[test]
    fn disabled_accordion_ignores_toggles() {
        let handle = AccordionHandle::new(
            AccordionState::multiple(Controllable::uncontrolled(Vec::new())).disabled(true),
        );
        items(&handle)[1].toggle();
        assert!(handle.expanded().is_empty());
    }

    #[test]
    fn item_outside_accordion_is_an_error() {
        let err = AccordionItem::new("orphan").unwrap_err();
        assert_eq!(err.to_string(), "AccordionItem must be used within Accordion");
    }
}
