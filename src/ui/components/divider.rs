//! Horizontal and vertical separators.

use gpui::{
    div, prelude::FluentBuilder, px, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
};

use crate::tokens::{spacing, typography};
use crate::ui::theme::ThemeColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A 1px rule, optionally with a centered label (horizontal only).
#[derive(IntoElement)]
pub struct Divider {
    orientation: Orientation,
    label: Option<SharedString>,
}

impl Divider {
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            label: None,
        }
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl RenderOnce for Divider {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);

        match (self.orientation, self.label) {
            (Orientation::Vertical, _) => div()
                .w(px(1.0))
                .h_full()
                .bg(colors.border)
                .into_any_element(),
            (Orientation::Horizontal, label) => {
                let line = || div().flex_1().h(px(1.0)).bg(colors.border);
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap(px(spacing::SM))
                    .child(line())
                    .when_some(label, |this, label| {
                        this.child(
                            div()
                                .text_size(px(typography::SIZE_XS))
                                .text_color(colors.text_muted)
                                .child(label),
                        )
                        .child(line())
                    })
                    .into_any_element()
            }
        }
    }
}
