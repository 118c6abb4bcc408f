//! Progress bar component.

use gpui::{div, px, relative, IntoElement, ParentElement, RenderOnce, Styled};

use crate::notifications::ToastVariant;
use crate::tokens::radius;
use crate::ui::theme::ThemeColors;

/// A determinate progress bar.
#[derive(IntoElement)]
pub struct Progress {
    value: f32,
    max: f32,
    variant: ToastVariant,
    height: f32,
}

impl Progress {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            max: 100.0,
            variant: ToastVariant::Information,
            height: 6.0,
        }
    }

    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    /// Status color of the filled part.
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Filled fraction in `0.0..=1.0`. Non-positive or NaN maxima read as
    /// empty.
    pub fn fraction(&self) -> f32 {
        if self.max.is_nan() || self.max <= 0.0 || self.value.is_nan() {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }
}

impl RenderOnce for Progress {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let (fill, _) = colors.status(self.variant);
        let fraction = self.fraction();

        div()
            .w_full()
            .h(px(self.height))
            .rounded(px(radius::FULL))
            .bg(colors.surface_elevated)
            .overflow_hidden()
            .child(
                div()
                    .h_full()
                    .w(relative(fraction))
                    .rounded(px(radius::FULL))
                    .bg(fill),
            )
    }
}
