//! Fixed-length PIN/OTP entry.
//!
//! The value is always a prefix: slot `i` is filled only if every slot
//! before it is. Focus can never move past the first empty slot.

use std::fmt;
use std::rc::Rc;

use super::controllable::Controllable;
use super::events::Key;

/// Characters a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinMode {
    #[default]
    Numeric,
    Alphanumeric,
}

impl PinMode {
    pub fn accepts(self, c: char) -> bool {
        match self {
            PinMode::Numeric => c.is_ascii_digit(),
            PinMode::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

pub const MASK_CHAR: char = '•';

pub struct PinInputState {
    length: usize,
    mode: PinMode,
    value: Controllable<String>,
    focused: usize,
    mask: bool,
    on_complete: Option<Rc<dyn Fn(&str)>>,
    /// A controlled edit waiting for the caller: the value asked for and
    /// where focus goes once it arrives.
    requested: Option<(String, usize)>,
}

impl PinInputState {
    pub fn new(length: usize, value: Controllable<String>) -> Self {
        let length = length.max(1);
        let mut state = Self {
            length,
            mode: PinMode::default(),
            value,
            focused: 0,
            mask: false,
            on_complete: None,
            requested: None,
        };
        state.focused = state.last_reachable();
        state
    }

    #[must_use]
    pub fn mode(mut self, mode: PinMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    /// Called with the full value whenever the last empty slot fills.
    #[must_use]
    pub fn on_complete(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_complete = Some(Rc::new(handler));
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn value(&self) -> &str {
        self.value.value()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_complete(&self) -> bool {
        self.value().chars().count() == self.length
    }

    /// Slot contents for rendering, masked if enabled.
    pub fn slots(&self) -> Vec<Option<char>> {
        let mut chars = self.value().chars();
        (0..self.length)
            .map(|_| {
                chars
                    .next()
                    .map(|c| if self.mask { MASK_CHAR } else { c })
            })
            .collect()
    }

    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(self.last_reachable());
    }

    /// Writes `c` into the focused slot. Returns false if `c` is rejected.
    pub fn input(&mut self, c: char) -> bool {
        if !self.mode.accepts(c) {
            return false;
        }

        let mut chars: Vec<char> = self.value().chars().collect();
        let at = self.focused.min(chars.len());
        if at < chars.len() {
            chars[at] = c;
        } else {
            chars.push(c);
        }
        self.commit(chars, at + 1);
        true
    }

    /// Clears the focused slot, or the previous one if the focused slot is
    /// already empty.
    pub fn backspace(&mut self) {
        let mut chars: Vec<char> = self.value().chars().collect();
        let mut at = self.focused;
        if at >= chars.len() {
            if at == 0 {
                return;
            }
            at -= 1;
        }
        if at < chars.len() {
            chars.remove(at);
        }
        self.commit(chars, at);
    }

    /// Fills slots from the focused one with the accepted characters of
    /// `text`. Returns how many characters were taken.
    pub fn paste(&mut self, text: &str) -> usize {
        let mut chars: Vec<char> = self.value().chars().collect();
        let start = self.focused.min(chars.len());
        let accepted: Vec<char> = text
            .chars()
            .filter(|c| self.mode.accepts(*c))
            .take(self.length - start)
            .collect();
        if accepted.is_empty() {
            return 0;
        }

        for (offset, c) in accepted.iter().enumerate() {
            let at = start + offset;
            if at < chars.len() {
                chars[at] = *c;
            } else {
                chars.push(*c);
            }
        }
        let taken = accepted.len();
        self.commit(chars, start + taken);
        taken
    }

    pub fn clear(&mut self) {
        self.commit(Vec::new(), 0);
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => self.focus(self.focused.saturating_sub(1)),
            Key::ArrowRight => self.focus(self.focused + 1),
            Key::Home => self.focus(0),
            Key::End => self.focus(self.length),
            Key::Backspace | Key::Delete => self.backspace(),
            Key::Char(c) => return self.input(c),
            _ => return false,
        }
        true
    }

    /// Feeds the caller's value back in. Focus advances and completion
    /// fires only once a controlled edit has actually arrived.
    pub fn sync(&mut self, value: Option<String>) {
        let was_complete = self.is_complete();
        self.value.sync(value);
        self.focused = match self.requested.take() {
            Some((requested, focus)) if requested == self.value() => focus,
            _ => self.focused.min(self.last_reachable()),
        };
        if !was_complete {
            self.notify_complete();
        }
    }

    fn commit(&mut self, chars: Vec<char>, focus: usize) {
        let next: String = chars.into_iter().collect();
        let focus = focus.min(self.length - 1);

        if self.value.is_controlled() {
            self.requested = Some((next.clone(), focus));
            self.value.set(next);
            return;
        }

        let was_complete = self.is_complete();
        self.value.set(next);
        self.focused = focus;
        if !was_complete {
            self.notify_complete();
        }
    }

    fn notify_complete(&self) {
        if !self.is_complete() {
            return;
        }
        if let Some(handler) = &self.on_complete {
            handler(self.value());
        }
    }

    fn last_reachable(&self) -> usize {
        self.value().chars().count().min(self.length - 1)
    }
}

impl fmt::Debug for PinInputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinInputState")
            .field("length", &self.length)
            .field("mode", &self.mode)
            .field("focused", &self.focused)
            .field("filled", &self.value().chars().count())
            .field("mask", &self.mask)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn pin(length: usize) -> PinInputState {
        PinInputState::new(length, Controllable::uncontrolled(String::new()))
    }

    #[test]
    fn typing_fills_slots_in_order() {
        let mut state = pin(4);
        for c in ['1', '2', '3'] {
            assert!(state.input(c));
        }
        assert_eq!(state.value(), "123");
        assert_eq!(state.focused(), 3);
        assert_eq!(state.slots(), vec![Some('1'), Some('2'), Some('3'), None]);
    }

    #[test]
    fn numeric_mode_rejects_letters() {
        let mut state = pin(4);
        assert!(!state.input('a'));
        assert_eq!(state.value(), "");

        let mut state = pin(4).mode(PinMode::Alphanumeric);
        assert!(state.input('a'));
    }

    #[test]
    fn backspace_on_empty_slot_clears_previous() {
        let mut state = pin(4);
        state.input('1');
        state.input('2');

        state.backspace();
        assert_eq!(state.value(), "1");
        assert_eq!(state.focused(), 1);

        state.backspace();
        state.backspace();
        assert_eq!(state.value(), "");
        assert_eq!(state.focused(), 0);
    }

    #[test]
    fn focus_cannot_skip_empty_slots() {
        let mut state = pin(6);
        state.input('9');
        state.focus(5);
        assert_eq!(state.focused(), 1);
    }

    #[test]
    fn paste_filters_and_truncates() {
        let mut state = pin(4);
        let taken = state.paste("12-34-56");
        assert_eq!(taken, 4);
        assert_eq!(state.value(), "1234");
        assert_eq!(state.focused(), 3);
    }

    #[test]
    fn completion_fires_once_when_full() {
        let completed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&completed);
        let mut state = pin(3).on_complete(move |v| sink.borrow_mut().push(v.to_string()));

        state.paste("12");
        assert!(completed.borrow().is_empty());

        state.input('3');
        // Overwriting the last slot keeps it full, no second event.
        state.input('4');

        assert_eq!(*completed.borrow(), vec!["123".to_string()]);
        assert_eq!(state.value(), "124");
    }

    #[test]
    fn mask_hides_characters() {
        let mut state = pin(2).mask(true);
        state.input('7');
        assert_eq!(state.slots(), vec![Some(MASK_CHAR), None]);
        assert_eq!(state.value(), "7");
    }

    #[test]
    fn controlled_pin_waits_for_sync() {
        let mut state = PinInputState::new(4, Controllable::controlled("12".to_string()));
        assert_eq!(state.focused(), 2);

        state.input('3');
        assert_eq!(state.value(), "12");

        state.sync(Some("123".to_string()));
        assert_eq!(state.value(), "123");
        assert_eq!(state.focused(), 3);
    }

    #[test]
    fn controlled_edit_moves_focus_only_after_sync() {
        let completed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&completed);
        let mut state = PinInputState::new(3, Controllable::controlled("12".to_string()))
            .on_complete(move |v| sink.borrow_mut().push(v.to_string()));

        state.input('3');
        assert_eq!(state.focused(), 2);
        assert!(completed.borrow().is_empty());

        state.sync(Some("123".to_string()));
        assert_eq!(*completed.borrow(), vec!["123".to_string()]);
        assert_eq!(state.focused(), 2);
    }

    #[test]
    fn rejected_controlled_edit_leaves_focus() {
        let mut state = PinInputState::new(4, Controllable::controlled("1".to_string()));

        state.input('2');
        state.sync(Some("1".to_string()));

        assert_eq!(state.value(), "1");
        assert_eq!(state.focused(), 1);
    }
}
