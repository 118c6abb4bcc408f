//! Floating panel positioning for popovers and tooltips.
//!
//! - [`geometry`]: points, sizes, rects and the [`Measure`] trait
//! - [`placement`]: the twelve named placements and the anchor math
//! - [`panel`]: [`FloatingPanel`], open state plus live positioning

pub mod geometry;
pub mod panel;
pub mod placement;

pub use geometry::{Measure, MeasuredRect, Point, Rect, Size};
pub use panel::FloatingPanel;
pub use placement::{Align, FloatingPosition, Offset, ParsePlacementError, Placement, Side};
