//! Where a floating panel sits relative to its trigger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, Size};

/// Which side of the trigger the panel opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Alignment along the side's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

/// Named placement of a floating panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopStart,
    Top,
    TopEnd,
    BottomStart,
    #[default]
    Bottom,
    BottomEnd,
    LeftStart,
    Left,
    LeftEnd,
    RightStart,
    Right,
    RightEnd,
}

impl Placement {
    pub const ALL: [Placement; 12] = [
        Placement::TopStart,
        Placement::Top,
        Placement::TopEnd,
        Placement::BottomStart,
        Placement::Bottom,
        Placement::BottomEnd,
        Placement::LeftStart,
        Placement::Left,
        Placement::LeftEnd,
        Placement::RightStart,
        Placement::Right,
        Placement::RightEnd,
    ];

    pub fn side(self) -> Side {
        match self {
            Placement::TopStart | Placement::Top | Placement::TopEnd => Side::Top,
            Placement::BottomStart | Placement::Bottom | Placement::BottomEnd => Side::Bottom,
            Placement::LeftStart | Placement::Left | Placement::LeftEnd => Side::Left,
            Placement::RightStart | Placement::Right | Placement::RightEnd => Side::Right,
        }
    }

    pub fn align(self) -> Align {
        match self {
            Placement::TopStart
            | Placement::BottomStart
            | Placement::LeftStart
            | Placement::RightStart => Align::Start,
            Placement::Top | Placement::Bottom | Placement::Left | Placement::Right => {
                Align::Center
            }
            Placement::TopEnd | Placement::BottomEnd | Placement::LeftEnd | Placement::RightEnd => {
                Align::End
            }
        }
    }

    /// Computes the anchor point and panel offset for a trigger box.
    pub fn resolve(self, trigger: Rect, gap: f32) -> FloatingPosition {
        let along = |start: f32, center: f32, end: f32| match self.align() {
            Align::Start => start,
            Align::Center => center,
            Align::End => end,
        };
        let shift = along(0.0, -0.5, -1.0);

        let (anchor, offset) = match self.side() {
            Side::Top => (
                Point::new(
                    along(trigger.left(), trigger.center_x(), trigger.right()),
                    trigger.top() - gap,
                ),
                Offset::new(shift, -1.0),
            ),
            Side::Bottom => (
                Point::new(
                    along(trigger.left(), trigger.center_x(), trigger.right()),
                    trigger.bottom() + gap,
                ),
                Offset::new(shift, 0.0),
            ),
            Side::Left => (
                Point::new(
                    trigger.left() - gap,
                    along(trigger.top(), trigger.center_y(), trigger.bottom()),
                ),
                Offset::new(-1.0, shift),
            ),
            Side::Right => (
                Point::new(
                    trigger.right() + gap,
                    along(trigger.top(), trigger.center_y(), trigger.bottom()),
                ),
                Offset::new(0.0, shift),
            ),
        };

        FloatingPosition { anchor, offset }
    }

    fn as_str(self) -> &'static str {
        match self {
            Placement::TopStart => "top-start",
            Placement::Top => "top",
            Placement::TopEnd => "top-end",
            Placement::BottomStart => "bottom-start",
            Placement::Bottom => "bottom",
            Placement::BottomEnd => "bottom-end",
            Placement::LeftStart => "left-start",
            Placement::Left => "left",
            Placement::LeftEnd => "left-end",
            Placement::RightStart => "right-start",
            Placement::Right => "right",
            Placement::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a placement name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement: {0}")]
pub struct ParsePlacementError(String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|placement| placement.as_str() == s)
            .ok_or_else(|| ParsePlacementError(s.to_string()))
    }
}

/// Panel shift as fractions of the panel's own size.
///
/// `-0.5` on x centres the panel on the anchor; `-1.0` puts its right edge
/// there.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Resolved anchor and offset for an open panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingPosition {
    pub anchor: Point,
    pub offset: Offset,
}

impl FloatingPosition {
    /// Top-left corner of a panel of `size`.
    pub fn origin(&self, size: Size) -> Point {
        Point::new(
            self.anchor.x + self.offset.x * size.width,
            self.anchor.y + self.offset.y * size.height,
        )
    }
}
