//! Inline callout for contextual messages.

use gpui::{
    div, prelude::FluentBuilder, px, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled,
};

use crate::notifications::ToastVariant;
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::icon::{Icon, IconSize};
use crate::ui::theme::ThemeColors;

/// A bordered box with a status icon, a title and an optional description.
#[derive(IntoElement)]
pub struct Information {
    id: ElementId,
    variant: ToastVariant,
    title: SharedString,
    description: Option<SharedString>,
}

impl Information {
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            variant: ToastVariant::Information,
            title: title.into(),
            description: None,
        }
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl RenderOnce for Information {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let (accent, surface) = colors.status(self.variant);
        let icon_id = SharedString::from(format!("{}-icon", self.title));

        div()
            .id(self.id)
            .w_full()
            .flex()
            .gap(px(spacing::MD))
            .p(px(spacing::MD))
            .rounded(px(radius::LG))
            .border_1()
            .border_color(accent)
            .bg(surface)
            .child(
                Icon::from_name(icon_id, self.variant.default_icon())
                    .size(IconSize::Large)
                    .color(accent),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(spacing::XS))
                    .child(
                        div()
                            .text_size(px(typography::SIZE_MD))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(colors.text_primary)
                            .child(self.title),
                    )
                    .when_some(self.description, |this, description| {
                        this.child(
                            div()
                                .text_size(px(typography::SIZE_SM))
                                .text_color(colors.text_secondary)
                                .child(description),
                        )
                    }),
            )
    }
}
