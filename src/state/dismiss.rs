//! Open/close state for overlays that can be dismissed.
//!
//! A [`Dismissible`] owns an open flag and, only while open, a subscription
//! to viewport events. Explicit closes, outside clicks and Escape all go
//! through [`Dismissible::dismiss`], so the open flag and the listener
//! registration can never disagree.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::floating::geometry::Measure;
use crate::state::controllable::Controllable;
use crate::state::emitter::{Emitter, Subscription};
use crate::state::events::{Key, ViewportEvent};

/// Why an overlay closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Close button, trigger toggle, or a programmatic close.
    Explicit,
    /// A pointer press landed outside every inside region.
    OutsideClick,
    Escape,
}

/// Lifecycle points an overlay's layout reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    Opened,
    /// Scroll or resize while open.
    Moved,
    Closed,
}

pub type LayoutHook = Rc<dyn Fn(LayoutEvent)>;

struct Inner {
    open: Controllable<bool>,
    viewport: Emitter<ViewportEvent>,
    subscription: Option<Subscription>,
    inside: Vec<Rc<dyn Measure>>,
    close_on_escape: bool,
    close_on_outside_click: bool,
    last_dismissal: Option<DismissReason>,
    layout: Option<LayoutHook>,
}

/// Shared handle to an overlay's open state.
#[derive(Clone)]
pub struct Dismissible {
    inner: Rc<RefCell<Inner>>,
}

impl Dismissible {
    pub fn new(viewport: &Emitter<ViewportEvent>, open: Controllable<bool>) -> Self {
        Self::build(viewport, open, None)
    }

    /// Like [`Dismissible::new`], with a hook run on open, move and close.
    pub fn with_layout(
        viewport: &Emitter<ViewportEvent>,
        open: Controllable<bool>,
        layout: impl Fn(LayoutEvent) + 'static,
    ) -> Self {
        Self::build(viewport, open, Some(Rc::new(layout)))
    }

    fn build(
        viewport: &Emitter<ViewportEvent>,
        open: Controllable<bool>,
        layout: Option<LayoutHook>,
    ) -> Self {
        let this = Self {
            inner: Rc::new(RefCell::new(Inner {
                open,
                viewport: viewport.clone(),
                subscription: None,
                inside: Vec::new(),
                close_on_escape: true,
                close_on_outside_click: true,
                last_dismissal: None,
                layout,
            })),
        };
        this.reconcile();
        this
    }

    #[must_use]
    pub fn close_on_escape(self, enabled: bool) -> Self {
        self.inner.borrow_mut().close_on_escape = enabled;
        self
    }

    #[must_use]
    pub fn close_on_outside_click(self, enabled: bool) -> Self {
        self.inner.borrow_mut().close_on_outside_click = enabled;
        self
    }

    /// Registers a region whose pointer presses do not count as outside.
    pub fn add_inside_region(&self, region: Rc<dyn Measure>) {
        self.inner.borrow_mut().inside.push(region);
    }

    pub fn set_on_open_change(&self, handler: impl Fn(&bool) + 'static) {
        self.inner.borrow_mut().open.set_on_change(handler);
    }

    pub fn is_open(&self) -> bool {
        *self.inner.borrow().open.value()
    }

    pub fn is_controlled(&self) -> bool {
        self.inner.borrow().open.is_controlled()
    }

    /// Whether the viewport subscription is currently registered.
    pub fn is_listening(&self) -> bool {
        self.inner.borrow().subscription.is_some()
    }

    pub fn last_dismissal(&self) -> Option<DismissReason> {
        self.inner.borrow().last_dismissal
    }

    pub fn open(&self) {
        self.request(true, None);
    }

    pub fn close(&self) {
        self.dismiss(DismissReason::Explicit);
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// The single close path.
    pub fn dismiss(&self, reason: DismissReason) {
        self.request(false, Some(reason));
    }

    /// Feeds a controlled open flag back in.
    pub fn sync(&self, external: Option<bool>) {
        self.inner.borrow_mut().open.sync(external);
        self.reconcile();
    }

    fn request(&self, open: bool, reason: Option<DismissReason>) {
        let change = {
            let mut inner = self.inner.borrow_mut();
            if *inner.open.value() == open {
                return;
            }
            if reason.is_some() {
                inner.last_dismissal = reason;
            }
            inner.open.apply(open)
        };

        self.reconcile();

        if let Some(change) = change {
            change.notify();
        }
    }

    /// Brings the subscription in line with the open flag.
    fn reconcile(&self) {
        let (event, hook) = {
            let mut inner = self.inner.borrow_mut();
            let open = *inner.open.value();
            let event = match (open, inner.subscription.is_some()) {
                (true, false) => {
                    let subscription = self.listen(&inner.viewport);
                    inner.subscription = Some(subscription);
                    LayoutEvent::Opened
                }
                (false, true) => {
                    inner.subscription = None;
                    LayoutEvent::Closed
                }
                _ => return,
            };
            (event, inner.layout.clone())
        };

        tracing::trace!(?event, "overlay lifecycle");
        if let Some(hook) = hook {
            hook(event);
        }
    }

    fn listen(&self, viewport: &Emitter<ViewportEvent>) -> Subscription {
        let inner = Rc::downgrade(&self.inner);
        viewport.subscribe(move |event| {
            if let Some(inner) = inner.upgrade() {
                Dismissible { inner }.handle(event);
            }
        })
    }

    fn handle(&self, event: &ViewportEvent) {
        match *event {
            ViewportEvent::Scroll | ViewportEvent::Resize => {
                let hook = self.inner.borrow().layout.clone();
                if let Some(hook) = hook {
                    hook(LayoutEvent::Moved);
                }
            }
            ViewportEvent::PointerDown(point) => {
                let outside = {
                    let inner = self.inner.borrow();
                    inner.close_on_outside_click
                        && !inner
                            .inside
                            .iter()
                            .filter_map(|region| region.bounds())
                            .any(|bounds| bounds.contains(point))
                };
                if outside {
                    self.dismiss(DismissReason::OutsideClick);
                }
            }
            ViewportEvent::KeyDown(Key::Escape) => {
                if self.inner.borrow().close_on_escape {
                    self.dismiss(DismissReason::Escape);
                }
            }
            ViewportEvent::KeyDown(_) => {}
        }
    }
}

impl fmt::Debug for Dismissible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Dismissible")
            .field("open", inner.open.value())
            .field("listening", &inner.subscription.is_some())
            .field("last_dismissal", &inner.last_dismissal)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floating::geometry::{MeasuredRect, Point, Rect};
    use std::cell::Cell;

    fn viewport() -> Emitter<ViewportEvent> {
        Emitter::new()
    }

    #[test]
    fn listens_only_while_open() {
        let viewport = viewport();
        let overlay = Dismissible::new(&viewport, Controllable::uncontrolled(false));
        assert_eq!(viewport.listener_count(), 0);

        overlay.open();
        assert!(overlay.is_listening());
        assert_eq!(viewport.listener_count(), 1);

        overlay.close();
        assert!(!overlay.is_listening());
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn initially_open_overlay_listens_immediately() {
        let viewport = viewport();
        let overlay = Dismissible::new(&viewport, Controllable::uncontrolled(true));
        assert!(overlay.is_listening());
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn escape_closes_through_dismiss_path() {
        let viewport = viewport();
        let overlay = Dismissible::new(&viewport, Controllable::uncontrolled(true));

        viewport.emit(&ViewportEvent::KeyDown(Key::Escape));

        assert!(!overlay.is_open());
        assert_eq!(overlay.last_dismissal(), Some(DismissReason::Escape));
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn escape_can_be_disabled() {
        let viewport = viewport();
        let overlay =
            Dismissible::new(&viewport, Controllable::uncontrolled(true)).close_on_escape(false);

        viewport.emit(&ViewportEvent::KeyDown(Key::Escape));
        assert!(overlay.is_open());
    }

    #[test]
    fn clicks_inside_regions_are_ignored() {
        let viewport = viewport();
        let overlay = Dismissible::new(&viewport, Controllable::uncontrolled(true));
        let region = Rc::new(MeasuredRect::new());
        region.set(Rect::new(0.0, 0.0, 50.0, 50.0));
        overlay.add_inside_region(region);

        viewport.emit(&ViewportEvent::PointerDown(Point::new(25.0, 25.0)));
        assert!(overlay.is_open());

        viewport.emit(&ViewportEvent::PointerDown(Point::new(80.0, 25.0)));
        assert!(!overlay.is_open());
        assert_eq!(overlay.last_dismissal(), Some(DismissReason::OutsideClick));
    }

    #[test]
    fn controlled_overlay_reports_but_waits_for_sync() {
        let viewport = viewport();
        let requested = Rc::new(Cell::new(None));
        let sink = Rc::clone(&requested);
        let overlay = Dismissible::new(
            &viewport,
            Controllable::controlled(true).on_change(move |open| sink.set(Some(*open))),
        );

        viewport.emit(&ViewportEvent::KeyDown(Key::Escape));
        assert_eq!(requested.get(), Some(false));
        assert!(overlay.is_open());
        assert!(overlay.is_listening());

        overlay.sync(Some(false));
        assert!(!overlay.is_listening());
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn change_handler_may_reenter() {
        let viewport = viewport();
        let slot: Rc<RefCell<Option<Dismissible>>> = Rc::new(RefCell::new(None));
        let reentry = Rc::clone(&slot);
        let overlay = Dismissible::new(
            &viewport,
            Controllable::controlled(true).on_change(move |open| {
                if let Some(overlay) = reentry.borrow().as_ref() {
                    overlay.sync(Some(*open));
                }
            }),
        );
        *slot.borrow_mut() = Some(overlay.clone());

        overlay.close();

        assert!(!overlay.is_open());
        assert_eq!(viewport.listener_count(), 0);
        slot.borrow_mut().take();
    }

    #[test]
    fn layout_hook_sees_full_lifecycle() {
        let viewport = viewport();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let overlay = Dismissible::with_layout(
            &viewport,
            Controllable::uncontrolled(false),
            move |event| sink.borrow_mut().push(event),
        );

        overlay.open();
        viewport.emit(&ViewportEvent::Scroll);
        viewport.emit(&ViewportEvent::Resize);
        overlay.close();
        viewport.emit(&ViewportEvent::Scroll);

        assert_eq!(
            *events.borrow(),
            vec![
                LayoutEvent::Opened,
                LayoutEvent::Moved,
                LayoutEvent::Moved,
                LayoutEvent::Closed,
            ]
        );
    }

    #[test]
    fn dropping_overlay_releases_listener() {
        let viewport = viewport();
        let overlay = Dismissible::new(&viewport, Controllable::uncontrolled(true));
        assert_eq!(viewport.listener_count(), 1);

        drop(overlay);
        assert_eq!(viewport.listener_count(), 0);
    }
}
