//! Tabs component with arrow-key navigation.

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, Context, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::state::{ContextError, Key, TabPanel, TabTrigger, TabsHandle, TabsState};
use crate::tokens::{spacing, typography};
use crate::ui::theme::ThemeColors;

/// One tab: its trigger label and panel body.
#[derive(Debug, Clone)]
pub struct TabSpec {
    pub value: String,
    pub label: SharedString,
    pub body: SharedString,
    pub disabled: bool,
}

impl TabSpec {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<SharedString>,
        body: impl Into<SharedString>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            body: body.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

struct BoundTab {
    trigger: TabTrigger,
    panel: TabPanel,
    label: SharedString,
    body: SharedString,
}

pub struct Tabs {
    id: SharedString,
    handle: TabsHandle,
    tabs: Vec<BoundTab>,
    focus_handle: FocusHandle,
}

impl Tabs {
    pub fn new(
        id: impl Into<SharedString>,
        state: TabsState,
        specs: Vec<TabSpec>,
        cx: &App,
    ) -> Result<Self, ContextError> {
        let handle = TabsHandle::new(state);
        let tabs = bind_tabs(&handle, specs)?;

        Ok(Self {
            id: id.into(),
            handle,
            tabs,
            focus_handle: cx.focus_handle(),
        })
    }

    pub fn handle(&self) -> &TabsHandle {
        &self.handle
    }

    pub fn sync(&mut self, selected: Option<String>) {
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

    fn render_trigger(
        &self,
        index: usize,
        colors: &ThemeColors,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let tab = &self.tabs[index];
        let selected = tab.trigger.is_selected();
        let disabled = tab.trigger.is_disabled();
        let text_color = if selected {
            colors.text_primary
        } else {
            colors.text_secondary
        };

        let activate = cx.listener(move |this, _event: &ClickEvent, window, cx| {
            window.focus(&this.focus_handle);
            this.tabs[index].trigger.activate();
            cx.notify();
        });

        div()
            .id(SharedString::from(format!("{}-trigger-{}", self.id, index)))
            .px(px(spacing::MD))
            .py(px(spacing::SM))
            .border_b_2()
            .border_color(if selected {
                colors.accent
            } else {
                gpui::Hsla::transparent_black()
            })
            .text_size(px(typography::SIZE_MD))
            .text_color(text_color)
            .when(disabled, |this| this.opacity(0.5))
            .when(!disabled, |this| this.cursor_pointer().on_click(activate))
            .child(tab.label.clone())
    }
}

fn bind_tabs(handle: &TabsHandle, specs: Vec<TabSpec>) -> Result<Vec<BoundTab>, ContextError> {
    handle.scope(|| {
        specs
            .into_iter()
            .map(|spec| {
                Ok(BoundTab {
                    trigger: TabTrigger::with_disabled(spec.value.clone(), spec.disabled)?,
                    panel: TabPanel::new(spec.value)?,
                    label: spec.label,
                    body: spec.body,
                })
            })
            .collect()
    })
}

impl Focusable for Tabs {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Tabs {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let mut triggers = Vec::with_capacity(self.tabs.len());
        for index in 0..self.tabs.len() {
            triggers.push(self.render_trigger(index, &colors, cx));
        }
        let body = self
            .tabs
            .iter()
            .find(|tab| tab.panel.is_visible())
            .map(|tab| tab.body.clone());

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .w_full()
            .flex()
            .flex_col()
            .gap(px(spacing::MD))
            .child(
                div()
                    .flex()
                    .border_b_1()
                    .border_color(colors.border)
                    .children(triggers),
            )
            .when_some(body, |this, body| {
                this.child(
                    div()
                        .text_size(px(typography::SIZE_SM))
                        .text_color(colors.text_secondary)
                        .child(body),
                )
            })
    }
}
