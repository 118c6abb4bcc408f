//! Floating panels and modals against a simulated viewport.

use std::cell::RefCell;
use std::rc::Rc;

use kiln::floating::{FloatingPanel, MeasuredRect, Placement, Point, Rect};
use kiln::state::{Controllable, DismissReason, Emitter, Key, ModalState, ViewportEvent};
use pretty_assertions::assert_eq;

const TRIGGER: Rect = Rect::new(100.0, 200.0, 80.0, 30.0);
const PANEL: Rect = Rect::new(0.0, 0.0, 120.0, 40.0);

struct Fixture {
    viewport: Emitter<ViewportEvent>,
    trigger: Rc<MeasuredRect>,
    content: Rc<MeasuredRect>,
}

impl Fixture {
    fn new() -> Self {
        let trigger = Rc::new(MeasuredRect::new());
        trigger.set(TRIGGER);
        let content = Rc::new(MeasuredRect::new());
        content.set(PANEL);
        Self {
            viewport: Emitter::new(),
            trigger,
            content,
        }
    }

    fn panel(&self, placement: Placement) -> FloatingPanel {
        let panel = FloatingPanel::closed(&self.viewport).placement(placement);
        panel.set_trigger(self.trigger.clone());
        panel.set_panel(self.content.clone());
        panel
    }

    fn press(&self, x: f32, y: f32) {
        self.viewport.emit(&ViewportEvent::PointerDown(Point::new(x, y)));
    }
}

#[test]
fn placements_put_the_panel_beside_the_trigger() {
    let fixture = Fixture::new();
    let cases = [
        (Placement::Bottom, Point::new(80.0, 238.0)),
        (Placement::Top, Point::new(80.0, 152.0)),
        (Placement::BottomStart, Point::new(100.0, 238.0)),
        (Placement::TopEnd, Point::new(60.0, 152.0)),
        (Placement::RightEnd, Point::new(188.0, 190.0)),
        (Placement::LeftStart, Point::new(-28.0, 200.0)),
        (Placement::Right, Point::new(188.0, 195.0)),
    ];

    for (placement, expected) in cases {
        let panel = fixture.panel(placement);
        panel.open();
        assert_eq!(panel.origin(), Some(expected), "{placement}");
    }
}

#[test]
fn closed_panel_has_no_position() {
    let fixture = Fixture::new();
    let panel = fixture.panel(Placement::Bottom);

    assert_eq!(panel.position(), None);
    panel.open();
    assert!(panel.position().is_some());
    panel.close();

    assert_eq!(panel.position(), None);
    assert_eq!(panel.origin(), None);
}

#[test]
fn unmeasured_trigger_renders_nothing() {
    let viewport = Emitter::new();
    let panel = FloatingPanel::closed(&viewport);
    panel.set_trigger(Rc::new(MeasuredRect::new()));

    panel.open();

    assert!(panel.is_open());
    assert_eq!(panel.position(), None);
}

#[test]
fn panel_follows_trigger_on_scroll() {
    let fixture = Fixture::new();
    let panel = fixture.panel(Placement::BottomStart);
    panel.open();

    fixture.trigger.set(Rect::new(100.0, 120.0, 80.0, 30.0));
    fixture.viewport.emit(&ViewportEvent::Scroll);

    assert_eq!(panel.origin(), Some(Point::new(100.0, 158.0)));
}

#[test]
fn outside_press_dismisses() {
    let fixture = Fixture::new();
    let panel = fixture.panel(Placement::Bottom);
    panel.open();

    fixture.press(140.0, 215.0);
    assert!(panel.is_open());

    fixture.press(500.0, 500.0);
    assert!(!panel.is_open());
    assert_eq!(panel.last_dismissal(), Some(DismissReason::OutsideClick));
}

#[test]
fn escape_dismisses_unless_disabled() {
    let fixture = Fixture::new();
    let panel = fixture.panel(Placement::Top);
    let sticky = fixture.panel(Placement::Top).close_on_escape(false);
    panel.open();
    sticky.open();

    fixture.viewport.emit(&ViewportEvent::KeyDown(Key::Escape));

    assert_eq!(panel.last_dismissal(), Some(DismissReason::Escape));
    assert!(sticky.is_open());
}

#[test]
fn listeners_detach_when_closed() {
    let fixture = Fixture::new();
    let panel = fixture.panel(Placement::Bottom);
    assert_eq!(fixture.viewport.listener_count(), 0);

    panel.open();
    assert!(panel.is_listening());
    assert_eq!(fixture.viewport.listener_count(), 1);

    panel.toggle();
    assert!(!panel.is_listening());
    assert_eq!(fixture.viewport.listener_count(), 0);
}

#[test]
fn hover_panels_ignore_outside_presses() {
    let fixture = Fixture::new();
    let tooltip = fixture.panel(Placement::Top).close_on_outside_click(false);
    tooltip.open();

    fixture.press(0.0, 0.0);

    assert!(tooltip.is_open());
}

#[test]
fn controlled_panel_reports_and_waits() {
    let fixture = Fixture::new();
    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&requests);
    let open = Controllable::controlled(false).on_change(move |open: &bool| {
        sink.borrow_mut().push(*open);
    });
    let panel = FloatingPanel::new(&fixture.viewport, open);
    panel.set_trigger(fixture.trigger.clone());

    panel.open();
    assert!(!panel.is_open());
    assert_eq!(*requests.borrow(), vec![true]);

    panel.sync(Some(true));
    assert!(panel.is_open());
    assert!(panel.position().is_some());
}

#[test]
fn modal_closes_from_overlay_but_not_content() {
    let viewport = Emitter::new();
    let modal = ModalState::new(&viewport, Controllable::uncontrolled(true));
    let content = Rc::new(MeasuredRect::new());
    content.set(Rect::new(300.0, 200.0, 400.0, 300.0));
    modal.set_content(content);

    viewport.emit(&ViewportEvent::PointerDown(Point::new(450.0, 300.0)));
    assert!(modal.is_open());

    viewport.emit(&ViewportEvent::PointerDown(Point::new(10.0, 10.0)));
    assert!(!modal.is_open());
    assert_eq!(modal.last_dismissal(), Some(DismissReason::OutsideClick));
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn modal_escape_can_be_disabled() {
    let viewport = Emitter::new();
    let modal =
        ModalState::new(&viewport, Controllable::uncontrolled(false)).close_on_escape(false);

    modal.open();
    viewport.emit(&ViewportEvent::KeyDown(Key::Escape));
    assert!(modal.is_open());

    modal.close();
    assert_eq!(modal.last_dismissal(), Some(DismissReason::Explicit));
}
