//! Open state plus live positioning for popovers and tooltips.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::geometry::{Measure, Point, Size};
use super::placement::{FloatingPosition, Placement};
use crate::state::controllable::Controllable;
use crate::state::dismiss::{DismissReason, Dismissible, LayoutEvent};
use crate::state::emitter::Emitter;
use crate::state::events::ViewportEvent;
use crate::tokens::FLOATING_GAP;

struct Layout {
    placement: Placement,
    gap: f32,
    trigger: Option<Rc<dyn Measure>>,
    panel: Option<Rc<dyn Measure>>,
    position: Option<FloatingPosition>,
}

impl Layout {
    fn recompute(&mut self) {
        self.position = self
            .trigger
            .as_ref()
            .and_then(|trigger| trigger.bounds())
            .map(|bounds| self.placement.resolve(bounds, self.gap));
        tracing::trace!(placement = %self.placement, position = ?self.position, "floating panel placed");
    }
}

/// A panel floating next to a trigger element.
///
/// While open the panel follows its trigger through scroll and resize. It
/// has no position while closed or while the trigger is unmeasured, and
/// callers render nothing in that case.
#[derive(Clone)]
pub struct FloatingPanel {
    dismiss: Dismissible,
    layout: Rc<RefCell<Layout>>,
}

impl FloatingPanel {
    pub fn new(viewport: &Emitter<ViewportEvent>, open: Controllable<bool>) -> Self {
        let layout = Rc::new(RefCell::new(Layout {
            placement: Placement::default(),
            gap: FLOATING_GAP,
            trigger: None,
            panel: None,
            position: None,
        }));

        let hook_layout = Rc::downgrade(&layout);
        let dismiss = Dismissible::with_layout(viewport, open, move |event| {
            let Some(layout) = hook_layout.upgrade() else {
                return;
            };
            let mut layout = layout.borrow_mut();
            match event {
                LayoutEvent::Opened | LayoutEvent::Moved => layout.recompute(),
                LayoutEvent::Closed => layout.position = None,
            }
        });

        Self { dismiss, layout }
    }

    /// Uncontrolled panel that starts closed.
    pub fn closed(viewport: &Emitter<ViewportEvent>) -> Self {
        Self::new(viewport, Controllable::uncontrolled(false))
    }

    #[must_use]
    pub fn placement(self, placement: Placement) -> Self {
        self.layout.borrow_mut().placement = placement;
        self.remeasure();
        self
    }

    #[must_use]
    pub fn gap(self, gap: f32) -> Self {
        self.layout.borrow_mut().gap = gap;
        self.remeasure();
        self
    }

    #[must_use]
    pub fn close_on_outside_click(self, enabled: bool) -> Self {
        Self {
            dismiss: self.dismiss.close_on_outside_click(enabled),
            layout: self.layout,
        }
    }

    #[must_use]
    pub fn close_on_escape(self, enabled: bool) -> Self {
        Self {
            dismiss: self.dismiss.close_on_escape(enabled),
            layout: self.layout,
        }
    }

    /// Sets the element the panel is positioned against.
    ///
    /// Pointer presses on the trigger never count as outside clicks.
    pub fn set_trigger(&self, trigger: Rc<dyn Measure>) {
        self.dismiss.add_inside_region(Rc::clone(&trigger));
        self.layout.borrow_mut().trigger = Some(trigger);
        self.remeasure();
    }

    /// Sets the panel element itself, used for its size and click region.
    pub fn set_panel(&self, panel: Rc<dyn Measure>) {
        self.dismiss.add_inside_region(Rc::clone(&panel));
        self.layout.borrow_mut().panel = Some(panel);
    }

    pub fn set_on_open_change(&self, handler: impl Fn(&bool) + 'static) {
        self.dismiss.set_on_open_change(handler);
    }

    /// Recomputes the position from the trigger's current bounds.
    pub fn remeasure(&self) {
        if self.dismiss.is_open() {
            self.layout.borrow_mut().recompute();
        }
    }

    pub fn placement_kind(&self) -> Placement {
        self.layout.borrow().placement
    }

    pub fn position(&self) -> Option<FloatingPosition> {
        self.layout.borrow().position
    }

    /// Top-left corner to render the panel at, if it should render at all.
    pub fn origin(&self) -> Option<Point> {
        let layout = self.layout.borrow();
        let position = layout.position?;
        let size = layout
            .panel
            .as_ref()
            .and_then(|panel| panel.bounds())
            .map(|bounds| bounds.size)
            .unwrap_or(Size::default());
        Some(position.origin(size))
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

    pub fn toggle(&self) {
        self.dismiss.toggle();
    }

    pub fn dismiss(&self, reason: DismissReason) {
        self.dismiss.dismiss(reason);
    }

    pub fn sync(&self, external: Option<bool>) {
        self.dismiss.sync(external);
    }
}

impl fmt::Debug for FloatingPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout.borrow();
        f.debug_struct("FloatingPanel")
            .field("placement", &layout.placement)
            .field("gap", &layout.gap)
            .field("position", &layout.position)
            .field("dismiss", &self.dismiss)
            .finish()
    }
}
