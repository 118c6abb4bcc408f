//! Checked state shared by Checkbox and Switch.

use std::fmt;

use super::controllable::Controllable;

/// What a checkbox displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedState {
    Unchecked,
    Checked,
    /// Neither checked nor unchecked, e.g. a "select all" over a partial set.
    Indeterminate,
}

impl fmt::Display for CheckedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckedState::Unchecked => write!(f, "unchecked"),
            CheckedState::Checked => write!(f, "checked"),
            CheckedState::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

#[derive(Debug)]
pub struct ToggleState {
    checked: Controllable<bool>,
    disabled: bool,
    indeterminate: bool,
}

impl ToggleState {
    pub fn new(checked: Controllable<bool>) -> Self {
        Self {
            checked,
            disabled: false,
            indeterminate: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    pub fn is_checked(&self) -> bool {
        *self.checked.value()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_controlled(&self) -> bool {
        self.checked.is_controlled()
    }

    pub fn display(&self) -> CheckedState {
        match (self.indeterminate, self.is_checked()) {
            (true, _) => CheckedState::Indeterminate,
            (false, true) => CheckedState::Checked,
            (false, false) => CheckedState::Unchecked,
        }
    }

    /// Requests the opposite of the displayed value.
    ///
    /// Toggling an indeterminate checkbox checks it. A controlled checkbox
    /// stays indeterminate until the caller clears it.
    pub fn toggle(&mut self) {
        if self.disabled {
            return;
        }
        let next = self.indeterminate || !self.is_checked();
        if !self.is_controlled() {
            self.indeterminate = false;
        }
        self.checked.set(next);
    }

    pub fn sync(&mut self, checked: Option<bool>) {
        self.checked.sync(checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn uncontrolled_toggle_flips_value() {
        let mut state = ToggleState::new(Controllable::uncontrolled(false));
        state.toggle();
        assert!(state.is_checked());
        state.toggle();
        assert!(!state.is_checked());
    }

    #[test]
    fn controlled_toggle_only_reports() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut state = ToggleState::new(
            Controllable::controlled(false).on_change(move |v| sink.borrow_mut().push(*v)),
        );

        state.toggle();

        assert!(!state.is_checked());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn disabled_toggle_is_ignored() {
        let mut state = ToggleState::new(Controllable::uncontrolled(false)).disabled(true);
        state.toggle();
        assert!(!state.is_checked());
    }

    #[test]
    fn indeterminate_resolves_to_checked() {
        let mut state = ToggleState::new(Controllable::uncontrolled(false)).indeterminate(true);
        assert_eq!(state.display(), CheckedState::Indeterminate);

        state.toggle();

        assert_eq!(state.display(), CheckedState::Checked);
    }

    #[test]
    fn controlled_indeterminate_waits_for_the_caller() {
        let mut state = ToggleState::new(Controllable::controlled(false)).indeterminate(true);

        state.toggle();
        assert_eq!(state.display(), CheckedState::Indeterminate);

        state.sync(Some(true));
        state.set_indeterminate(false);
        assert_eq!(state.display(), CheckedState::Checked);
    }
}
