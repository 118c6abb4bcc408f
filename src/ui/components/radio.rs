//! Radio group component.

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, Context, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::state::{ContextError, Key, Radio, RadioGroupHandle, RadioGroupState};
use crate::tokens::{spacing, typography};
use crate::ui::theme::ThemeColors;

#[derive(Debug, Clone)]
pub struct RadioOption {
    pub value: String,
    pub label: SharedString,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub struct RadioGroup {
    id: SharedString,
    handle: RadioGroupHandle,
    options: Vec<(Radio, SharedString)>,
    focus_handle: FocusHandle,
}

impl RadioGroup {
    pub fn new(
        id: impl Into<SharedString>,
        state: RadioGroupState,
        options: Vec<RadioOption>,
        cx: &App,
    ) -> Result<Self, ContextError> {
        let handle = RadioGroupHandle::new(state);
        let options = handle.scope(|| {
            options
                .into_iter()
                .map(|option| {
                    Ok((
                        Radio::with_disabled(option.value, option.disabled)?,
                        option.label,
                    ))
                })
                .collect::<Result<Vec<_>, ContextError>>()
        })?;

        Ok(Self {
            id: id.into(),
            handle,
            options,
            focus_handle: cx.focus_handle(),
        })
    }

    pub fn handle(&self) -> &RadioGroupHandle {
        &self.handle
    }

    pub fn sync(&mut self, selected: Option<Option<String>>) {
        self.handle.sync(selected);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(key) = Key::from_keystroke(&event.keystroke.key) else {
            return;
        };
        if self.handle.handle_key(key) {
            cx.stop_propagation();
            cx.notify();
        }
    }

    fn render_option(
        &self,
        index: usize,
        colors: &ThemeColors,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let (radio, label) = &self.options[index];
        let selected = radio.is_selected();
        let disabled = radio.is_disabled();

        let choose = cx.listener(move |this, _event: &ClickEvent, window, cx| {
            window.focus(&this.focus_handle);
            this.options[index].0.choose();
            cx.notify();
        });

        div()
            .id(SharedString::from(format!("{}-option-{}", self.id, index)))
            .flex()
            .items_center()
            .gap(px(spacing::SM))
            .when(disabled, |this| this.opacity(0.5))
            .when(!disabled, |this| this.cursor_pointer().on_click(choose))
            .child(
                div()
                    .size(px(16.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .border_1()
                    .border_color(if selected { colors.accent } else { colors.border })
                    .when(selected, |this| {
                        this.child(div().size(px(8.0)).rounded_full().bg(colors.accent))
                    }),
            )
            .child(
                div()
                    .text_size(px(typography::SIZE_MD))
                    .text_color(colors.text_primary)
                    .child(label.clone()),
            )
    }
}

impl Focusable for RadioGroup {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RadioGroup {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let mut options = Vec::with_capacity(self.options.len());
        for index in 0..self.options.len() {
            options.push(self.render_option(index, &colors, cx));
        }

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .flex()
            .flex_col()
            .gap(px(spacing::SM))
            .children(options)
    }
}
