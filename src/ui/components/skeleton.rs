//! Loading placeholders.

use gpui::{div, px, IntoElement, ParentElement, RenderOnce, Styled};

use crate::tokens::{radius, spacing};
use crate::ui::theme::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkeletonShape {
    /// `lines` bars of text height; the last one is shorter.
    Text { lines: usize },
    Circle { size: f32 },
    Rect { width: f32, height: f32 },
}

#[derive(IntoElement)]
pub struct Skeleton {
    shape: SkeletonShape,
}

impl Skeleton {
    pub fn text(lines: usize) -> Self {
        Self {
            shape: SkeletonShape::Text {
                lines: lines.max(1),
            },
        }
    }

    pub fn circle(size: f32) -> Self {
        Self {
            shape: SkeletonShape::Circle { size },
        }
    }

    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            shape: SkeletonShape::Rect { width, height },
        }
    }
}

/// Relative width of text line `index` out of `lines`.
fn line_fraction(index: usize, lines: usize) -> f32 {
    if lines > 1 && index == lines - 1 {
        0.6
    } else {
        1.0
    }
}

impl RenderOnce for Skeleton {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let fill = ThemeColors::current(cx).surface_elevated;

        match self.shape {
            SkeletonShape::Text { lines } => div()
                .w_full()
                .flex()
                .flex_col()
                .gap(px(spacing::SM))
                .children((0..lines).map(|index| {
                    div()
                        .h(px(12.0))
                        .w(gpui::relative(line_fraction(index, lines)))
                        .rounded(px(radius::SM))
                        .bg(fill)
                }))
                .into_any_element(),
            SkeletonShape::Circle { size } => div()
                .size(px(size))
                .rounded_full()
                .bg(fill)
                .into_any_element(),
            SkeletonShape::Rect { width, height } => div()
                .w(px(width))
                .h(px(height))
                .rounded(px(radius::MD))
                .bg(fill)
                .into_any_element(),
        }
    }
}
