//! Gallery actions.
//!
//! Bound to keyboard shortcuts in [`App::run`](super::App::run) and handled
//! by the gallery view.

use gpui::actions;

actions!(kiln, [Quit, ToggleTheme, ClearToasts]);
