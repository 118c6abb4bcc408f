//! Tooltip component.
//!
//! Shows a short text next to its trigger while the pointer is over it.

use std::rc::Rc;

use gpui::{
    div, px, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::floating::{FloatingPanel, MeasuredRect, Placement};
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::popover::floating_layer;
use crate::ui::theme::ThemeColors;
use crate::ui::viewport::measure;

pub struct Tooltip {
    id: SharedString,
    trigger_label: SharedString,
    content: SharedString,
    max_width: f32,
    panel: FloatingPanel,
    trigger: Rc<MeasuredRect>,
    bubble: Rc<MeasuredRect>,
}

impl Tooltip {
    /// Tooltips ignore outside clicks; leaving the trigger hides them.
    pub fn new(
        id: impl Into<SharedString>,
        trigger_label: impl Into<SharedString>,
        content: impl Into<SharedString>,
        panel: FloatingPanel,
    ) -> Self {
        let panel = panel.close_on_outside_click(false);
        let trigger = Rc::new(MeasuredRect::new());
        let bubble = Rc::new(MeasuredRect::new());
        panel.set_trigger(trigger.clone());
        panel.set_panel(bubble.clone());

        Self {
            id: id.into(),
            trigger_label: trigger_label.into(),
            content: content.into(),
            max_width: 200.0,
            panel,
            trigger,
            bubble,
        }
    }

    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn placement(&self) -> Placement {
        self.panel.placement_kind()
    }

    fn on_hover(&mut self, hovered: &bool, _window: &mut Window, cx: &mut Context<Self>) {
        if *hovered {
            self.panel.open();
        } else {
            self.panel.close();
        }
        cx.notify();
    }
}

impl Render for Tooltip {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);

        let bubble = div()
            .max_w(px(self.max_width))
            .px(px(spacing::SM))
            .py(px(spacing::XS))
            .rounded(px(radius::SM))
            .bg(colors.text_primary)
            .text_size(px(typography::SIZE_XS))
            .text_color(colors.background)
            .child(self.content.clone());

        div()
            .id(self.id.clone())
            .relative()
            .px(px(spacing::SM))
            .py(px(spacing::XS))
            .rounded(px(radius::SM))
            .border_1()
            .border_color(colors.border)
            .text_size(px(typography::SIZE_SM))
            .text_color(colors.text_secondary)
            .on_hover(cx.listener(Self::on_hover))
            .child(measure(self.trigger.clone()))
            .child(self.trigger_label.clone())
            .children(floating_layer(&self.panel, &self.bubble, bubble, window))
    }
}
