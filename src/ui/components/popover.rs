//! Popover component and the floating layer it shares with tooltips.

use std::rc::Rc;

use gpui::{
    anchored, deferred, div, point, px, AnyElement, ClickEvent, Context, Div, IntoElement,
    ParentElement, Render, SharedString, Styled, Window,
};

use crate::floating::{FloatingPanel, Measure, MeasuredRect};
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::theme::ThemeColors;
use crate::ui::viewport::measure;

/// Renders `body` at the panel's position, or nothing while closed.
///
/// The first frame after opening has no panel size yet; the panel is drawn
/// invisibly and measured, and the next frame places it.
pub(crate) fn floating_layer(
    panel: &FloatingPanel,
    content: &Rc<MeasuredRect>,
    body: Div,
    window: &mut Window,
) -> Option<AnyElement> {
    if !panel.is_open() {
        content.clear();
        return None;
    }

    panel.remeasure();
    let origin = panel.origin()?;
    let measured = content.bounds().is_some();
    if !measured {
        window.request_animation_frame();
    }

    Some(
        deferred(
            anchored().position(point(px(origin.x), px(origin.y))).child(
                body.relative()
                    .opacity(if measured { 1.0 } else { 0.0 })
                    .child(measure(content.clone())),
            ),
        )
        .with_priority(1)
        .into_any_element(),
    )
}

/// A button that toggles a floating panel of text.
pub struct Popover {
    id: SharedString,
    label: SharedString,
    body: SharedString,
    panel: FloatingPanel,
    trigger: Rc<MeasuredRect>,
    content: Rc<MeasuredRect>,
}

impl Popover {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        body: impl Into<SharedString>,
        panel: FloatingPanel,
    ) -> Self {
        let trigger = Rc::new(MeasuredRect::new());
        let content = Rc::new(MeasuredRect::new());
        panel.set_trigger(trigger.clone());
        panel.set_panel(content.clone());

        Self {
            id: id.into(),
            label: label.into(),
            body: body.into(),
            panel,
            trigger,
            content,
        }
    }

    pub fn panel(&self) -> &FloatingPanel {
        &self.panel
    }

    pub fn sync(&mut self, open: Option<bool>) {
        self.panel.sync(open);
    }
}

impl Render for Popover {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let toggle = cx.listener(|this, _event: &ClickEvent, _window, cx| {
            this.panel.toggle();
            cx.notify();
        });

        let body = div()
            .w(px(260.0))
            .p(px(spacing::MD))
            .rounded(px(radius::LG))
            .border_1()
            .border_color(colors.border)
            .bg(colors.surface_elevated)
            .text_size(px(typography::SIZE_SM))
            .text_color(colors.text_primary)
            .child(self.body.clone());

        div()
            .relative()
            .child(measure(self.trigger.clone()))
            .child(
                Button::new(
                    SharedString::from(format!("{}-trigger", self.id)),
                    self.label.clone(),
                )
                .variant(ButtonVariant::Secondary)
                .on_click(toggle),
            )
            .children(floating_layer(&self.panel, &self.content, body, window))
    }
}
