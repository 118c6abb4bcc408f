//! Viewport geometry in logical pixels.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box: top-left origin plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Anything whose viewport bounds can be read on demand.
///
/// `None` means the element is unmounted or has not been laid out yet.
#[cfg_attr(test, mockall::automock)]
pub trait Measure {
    fn bounds(&self) -> Option<Rect>;
}

/// Bounds recorded by the renderer after layout.
#[derive(Debug, Default)]
pub struct MeasuredRect {
    bounds: Cell<Option<Rect>>,
}

impl MeasuredRect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, bounds: Rect) {
        self.bounds.set(Some(bounds));
    }

    /// Forgets the bounds, e.g. when the element unmounts.
    pub fn clear(&self) {
        self.bounds.set(None);
    }
}

impl Measure for MeasuredRect {
    fn bounds(&self) -> Option<Rect> {
        self.bounds.get()
    }
}
