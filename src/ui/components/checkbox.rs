//! Checkbox component.

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::state::{CheckedState, ToggleState};
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::icon::{Icon, IconName, IconSize};
use crate::ui::theme::ThemeColors;

/// A labelled checkbox with an optional indeterminate state.
pub struct Checkbox {
    id: SharedString,
    label: SharedString,
    state: ToggleState,
}

impl Checkbox {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        state: ToggleState,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            state,
        }
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    /// Feeds the parent's value back in. Call it from the parent's render.
    pub fn sync(&mut self, checked: Option<bool>) {
        self.state.sync(checked);
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool, cx: &mut Context<Self>) {
        self.state.set_indeterminate(indeterminate);
        cx.notify();
    }
}

impl Render for Checkbox {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let display = self.state.display();
        let disabled = self.state.is_disabled();
        let filled = display != CheckedState::Unchecked;
        let mark = match display {
            CheckedState::Checked => Some(IconName::Check),
            CheckedState::Indeterminate => Some(IconName::Minus),
            CheckedState::Unchecked => None,
        };

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .gap(px(spacing::SM))
            .when(disabled, |this| this.opacity(0.5))
            .when(!disabled, |this| {
                this.cursor_pointer()
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.state.toggle();
                        cx.notify();
                    }))
            })
            .child(
                div()
                    .size(px(16.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded(px(radius::SM))
                    .border_1()
                    .border_color(if filled { colors.accent } else { colors.border })
                    .bg(if filled {
                        colors.accent
                    } else {
                        gpui::Hsla::transparent_black()
                    })
                    .when_some(mark, |this, mark| {
                        this.child(
                            Icon::named(SharedString::from(format!("{}-mark", self.id)), mark)
                                .size(IconSize::XSmall)
                                .color(colors.text_on_accent),
                        )
                    }),
            )
            .child(
                div()
                    .text_size(px(typography::SIZE_MD))
                    .text_color(colors.text_primary)
                    .child(self.label.clone()),
            )
    }
}
