//! Input events routed from the renderer into component state.

use std::fmt;

use crate::floating::geometry::Point;

/// A keyboard key, reduced to what components react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Char(char),
}

impl Key {
    /// Parses a gpui keystroke key name such as `"escape"`, `"left"` or `"a"`.
    pub fn from_keystroke(key: &str) -> Option<Self> {
        let key = match key {
            "escape" => Key::Escape,
            "enter" => Key::Enter,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "left" => Key::ArrowLeft,
            "right" => Key::ArrowRight,
            "up" => Key::ArrowUp,
            "down" => Key::ArrowDown,
            "home" => Key::Home,
            "end" => Key::End,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => write!(f, "Esc"),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Space => write!(f, "Space"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::ArrowLeft => write!(f, "Left"),
            Key::ArrowRight => write!(f, "Right"),
            Key::ArrowUp => write!(f, "Up"),
            Key::ArrowDown => write!(f, "Down"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Window-level events that open overlays listen to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Any ancestor scrolled.
    Scroll,
    /// The window was resized.
    Resize,
    /// A pointer was pressed at a viewport position.
    PointerDown(Point),
    KeyDown(Key),
}
