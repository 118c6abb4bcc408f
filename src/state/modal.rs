//! Modal dialog open state.

use std::rc::Rc;

use super::controllable::Controllable;
use super::dismiss::{DismissReason, Dismissible};
use super::emitter::Emitter;
use super::events::ViewportEvent;
use crate::floating::geometry::Measure;

/// A modal closes on Escape and on presses on its overlay, i.e. anywhere
/// outside the content box. Either can be turned off.
#[derive(Debug, Clone)]
pub struct ModalState {
    dismiss: Dismissible,
}

impl ModalState {
    pub fn new(viewport: &Emitter<ViewportEvent>, open: Controllable<bool>) -> Self {
        Self {
            dismiss: Dismissible::new(viewport, open),
        }
    }

    #[must_use]
    pub fn close_on_escape(self, enabled: bool) -> Self {
        Self {
            dismiss: self.dismiss.close_on_escape(enabled),
        }
    }

    #[must_use]
    pub fn close_on_overlay_click(self, enabled: bool) -> Self {
        Self {
            dismiss: self.dismiss.close_on_outside_click(enabled),
        }
    }

    /// Sets the dialog box. Presses inside it never close the modal.
    pub fn set_content(&self, content: Rc<dyn Measure>) {
        self.dismiss.add_inside_region(content);
    }

    pub fn set_on_open_change(&self, handler: impl Fn(&bool) + 'static) {
        self.dismiss.set_on_open_change(handler);
    }

    pub fn is_open(&self) -> bool {
        self.dismiss.is_open()
    }

    pub fn is_listening(&self) -> bool {
        self.dismiss.is_listening()
    }

    pub fn last_dismissal(&self) -> Option<DismissReason> {
        self.dismiss.last_dismissal()
    }

    pub fn open(&self) {
        self.dismiss.open();
    }

    pub fn close(&self) {
        self.dismiss.close();
    }

    pub fn sync(&self, open: Option<bool>) {
        self.dismiss.sync(open);
    }
}
