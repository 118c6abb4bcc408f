//! Switch component.

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::state::ToggleState;
use crate::tokens::{spacing, typography};
use crate::ui::theme::ThemeColors;

const TRACK_WIDTH: f32 = 36.0;
const TRACK_HEIGHT: f32 = 20.0;
const THUMB_INSET: f32 = 2.0;

pub struct Switch {
    id: SharedString,
    label: SharedString,
    state: ToggleState,
}

impl Switch {
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

    pub fn sync(&mut self, on: Option<bool>) {
        self.state.sync(on);
    }
}

/// Left offset of the thumb inside the track.
fn thumb_offset(on: bool) -> f32 {
    if on {
        TRACK_WIDTH - TRACK_HEIGHT + THUMB_INSET
    } else {
        THUMB_INSET
    }
}

impl Render for Switch {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let on = self.state.is_checked();
        let disabled = self.state.is_disabled();
        let thumb = TRACK_HEIGHT - THUMB_INSET * 2.0;

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
                    .relative()
                    .w(px(TRACK_WIDTH))
                    .h(px(TRACK_HEIGHT))
                    .rounded_full()
                    .bg(if on { colors.accent } else { colors.border })
                    .child(
                        div()
                            .absolute()
                            .top(px(THUMB_INSET))
                            .left(px(thumb_offset(on)))
                            .size(px(thumb))
                            .rounded_full()
                            .bg(colors.text_on_accent),
                    ),
            )
            .child(
                div()
                    .text_size(px(typography::SIZE_MD))
                    .text_color(colors.text_primary)
                    .child(self.label.clone()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_slides_to_the_far_end() {
        assert_eq!(thumb_offset(false), 2.0);
        assert_eq!(thumb_offset(true), 18.0);
    }
}
