//! Bridges gpui window input to [`ViewportEvent`]s and element bounds to
//! [`Measure`](crate::floating::Measure).

use std::rc::Rc;

use gpui::{canvas, Bounds, IntoElement, KeyDownEvent, MouseDownEvent, Pixels, Styled};

use crate::floating::geometry::{MeasuredRect, Point, Rect};
use crate::state::emitter::Emitter;
use crate::state::events::{Key, ViewportEvent};

pub fn rect_from_bounds(bounds: Bounds<Pixels>) -> Rect {
    Rect::new(
        f32::from(bounds.origin.x),
        f32::from(bounds.origin.y),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

pub fn point_from(point: gpui::Point<Pixels>) -> Point {
    Point::new(f32::from(point.x), f32::from(point.y))
}

/// An invisible element filling its parent that records the parent's
/// bounds into `target` on every frame. The parent must be `relative()`.
pub fn measure(target: Rc<MeasuredRect>) -> impl IntoElement {
    canvas(
        move |bounds, _window, _cx| target.set(rect_from_bounds(bounds)),
        |_, _, _, _| {},
    )
    .absolute()
    .size_full()
}

/// The window's input stream as seen by overlays.
///
/// The root view forwards raw gpui events here; open overlays subscribe
/// through their [`Dismissible`](crate::state::Dismissible).
#[derive(Clone, Default)]
pub struct Viewport {
    events: Emitter<ViewportEvent>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &Emitter<ViewportEvent> {
        &self.events
    }

    pub fn pointer_down(&self, event: &MouseDownEvent) {
        self.events
            .emit(&ViewportEvent::PointerDown(point_from(event.position)));
    }

    pub fn key_down(&self, event: &KeyDownEvent) {
        if let Some(key) = Key::from_keystroke(&event.keystroke.key) {
            self.events.emit(&ViewportEvent::KeyDown(key));
        }
    }

    pub fn scrolled(&self) {
        self.events.emit(&ViewportEvent::Scroll);
    }

    pub fn resized(&self) {
        self.events.emit(&ViewportEvent::Resize);
    }

    /// Number of overlays currently listening.
    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }
}
