//! One-character-per-box code entry.

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, Context, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::state::{Key, PinInputState};
use crate::tokens::{radius, spacing, typography};
use crate::ui::theme::ThemeColors;

pub struct PinInput {
    id: SharedString,
    state: PinInputState,
    focus_handle: FocusHandle,
}

impl PinInput {
    pub fn new(id: impl Into<SharedString>, state: PinInputState, cx: &App) -> Self {
        Self {
            id: id.into(),
            state,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn state(&self) -> &PinInputState {
        &self.state
    }

    pub fn sync(&mut self, value: Option<String>) {
        self.state.sync(value);
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.state.clear();
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let handled = if keystroke.modifiers.secondary() && keystroke.key == "v" {
            let text = cx.read_from_clipboard().and_then(|item| item.text());
            match text {
                Some(text) => self.state.paste(&text) > 0,
                None => false,
            }
        } else if keystroke.modifiers.secondary() || keystroke.modifiers.alt {
            false
        } else {
            Key::from_keystroke(&keystroke.key).is_some_and(|key| self.state.handle_key(key))
        };

        if handled {
            cx.stop_propagation();
            cx.notify();
        }
    }
}

impl Focusable for PinInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for PinInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let has_focus = self.focus_handle.is_focused(window);
        let focused = self.state.focused();
        let slots = self.state.slots();

        let boxes = slots.into_iter().enumerate().map(|(index, slot)| {
            let active = has_focus && index == focused;
            div()
                .id(SharedString::from(format!("{}-slot-{}", self.id, index)))
                .size(px(40.0))
                .flex()
                .items_center()
                .justify_center()
                .rounded(px(radius::MD))
                .border_1()
                .border_color(if active {
                    colors.border_focused
                } else {
                    colors.border
                })
                .bg(colors.surface)
                .text_size(px(typography::SIZE_XL))
                .text_color(colors.text_primary)
                .cursor_text()
                .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    this.state.focus(index);
                    cx.notify();
                }))
                .when_some(slot, |this, c| this.child(SharedString::from(c.to_string())))
        })
        .collect::<Vec<_>>();

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .flex()
            .gap(px(spacing::SM))
            .children(boxes)
    }
}
