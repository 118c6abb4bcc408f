//! Application views.

pub mod gallery;

pub use gallery::{Gallery, GalleryDemos};
