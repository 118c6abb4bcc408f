//! gpui rendering layer.
//!
//! - `theme`: color schemes built from the design tokens
//! - `viewport`: window input and element bounds for overlays
//! - `components`: display primitives and interactive components
//! - `views`: the component gallery

pub mod components;
pub mod theme;
pub mod viewport;
pub mod views;

pub use theme::{Theme, ThemeColors, ThemeMode};
pub use viewport::Viewport;
pub use views::Gallery;
