//! Modal dialog component.

use std::rc::Rc;

use gpui::{
    deferred, div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::floating::MeasuredRect;
use crate::state::{DismissReason, ModalState};
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::button::IconButton;
use crate::ui::components::icon::IconName;
use crate::ui::theme::ThemeColors;
use crate::ui::viewport::measure;

/// A centred dialog over a dimmed overlay.
///
/// Render it as a direct child of a `relative()` window root so the overlay
/// covers the whole window.
pub struct Modal {
    id: SharedString,
    title: SharedString,
    body: SharedString,
    state: ModalState,
    content: Rc<MeasuredRect>,
}

impl Modal {
    pub fn new(
        id: impl Into<SharedString>,
        title: impl Into<SharedString>,
        body: impl Into<SharedString>,
        state: ModalState,
    ) -> Self {
        let content = Rc::new(MeasuredRect::new());
        state.set_content(content.clone());
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            state,
            content,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn last_dismissal(&self) -> Option<DismissReason> {
        self.state.last_dismissal()
    }

    pub fn open(&mut self, cx: &mut Context<Self>) {
        self.state.open();
        cx.notify();
    }

    pub fn close(&mut self, cx: &mut Context<Self>) {
        self.state.close();
        cx.notify();
    }

    pub fn sync(&mut self, open: Option<bool>) {
        self.state.sync(open);
    }
}

impl Render for Modal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.state.is_open() {
            self.content.clear();
            return div().into_any_element();
        }

        let colors = ThemeColors::current(cx);
        let close = cx.listener(|this, _event: &ClickEvent, _window, cx| this.close(cx));

        let dialog = div()
            .relative()
            .w(px(420.0))
            .flex()
            .flex_col()
            .gap(px(spacing::MD))
            .p(px(spacing::XL))
            .rounded(px(radius::XL))
            .border_1()
            .border_color(colors.border)
            .bg(colors.surface_elevated)
            .child(measure(self.content.clone()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(typography::SIZE_LG))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(colors.text_primary)
                            .child(self.title.clone()),
                    )
                    .child(
                        IconButton::new(
                            SharedString::from(format!("{}-close", self.id)),
                            IconName::Close.symbol(),
                        )
                        .on_click(close),
                    ),
            )
            .child(
                div()
                    .text_size(px(typography::SIZE_MD))
                    .text_color(colors.text_secondary)
                    .child(self.body.clone()),
            );

        deferred(
            div()
                .id(self.id.clone())
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .occlude()
                .flex()
                .items_center()
                .justify_center()
                .bg(colors.overlay)
                .child(dialog),
        )
        .with_priority(2)
        .into_any_element()
    }
}
