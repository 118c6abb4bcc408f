//! Accordion component.
//!
//! A stack of collapsible sections sharing one [`AccordionHandle`].

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::state::{AccordionHandle, AccordionItem, AccordionState, ContextError};
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::icon::{Icon, IconName, IconSize};
use crate::ui::theme::ThemeColors;

/// Content of one section.
#[derive(Debug, Clone)]
pub struct AccordionSection {
    pub value: String,
    pub title: SharedString,
    pub body: SharedString,
}

impl AccordionSection {
    pub fn new(
        value: impl Into<String>,
        title: impl Into<SharedString>,
        body: impl Into<SharedString>,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

struct BoundSection {
    item: AccordionItem,
    section: AccordionSection,
}

pub struct Accordion {
    id: SharedString,
    handle: AccordionHandle,
    sections: Vec<BoundSection>,
}

impl Accordion {
    pub fn new(
        id: impl Into<SharedString>,
        state: AccordionState,
        sections: Vec<AccordionSection>,
    ) -> Result<Self, ContextError> {
        let handle = AccordionHandle::new(state);
        let sections = handle.scope(|| {
            sections
                .into_iter()
                .map(|section| {
                    Ok(BoundSection {
                        item: AccordionItem::new(section.value.clone())?,
                        section,
                    })
                })
                .collect::<Result<Vec<_>, ContextError>>()
        })?;

        Ok(Self {
            id: id.into(),
            handle,
            sections,
        })
    }

    pub fn handle(&self) -> &AccordionHandle {
        &self.handle
    }

    /// Feeds a controlled expansion list back in.
    pub fn sync(&mut self, expanded: Option<Vec<String>>) {
        self.handle.sync(expanded);
    }

    fn render_section(
        &self,
        index: usize,
        colors: &ThemeColors,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let bound = &self.sections[index];
        let expanded = bound.item.is_expanded();
        let hover_bg = colors.surface_elevated;

        let toggle = cx.listener(move |this, _event: &ClickEvent, _window, cx| {
            this.sections[index].item.toggle();
            cx.notify();
        });

        let chevron = if expanded {
            IconName::ChevronUp
        } else {
            IconName::ChevronDown
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .border_b_1()
            .border_color(colors.border)
            .child(
                div()
                    .id(SharedString::from(format!("{}-header-{}", self.id, index)))
                    .flex()
                    .items_center()
                    .justify_between()
                    .px(px(spacing::MD))
                    .py(px(spacing::SM))
                    .rounded(px(radius::SM))
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(toggle)
                    .child(
                        div()
                            .text_size(px(typography::SIZE_MD))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(colors.text_primary)
                            .child(bound.section.title.clone()),
                    )
                    .child(
                        Icon::named(
                            SharedString::from(format!("{}-chevron-{}", self.id, index)),
                            chevron,
                        )
                        .size(IconSize::Small)
                        .color(colors.text_muted),
                    ),
            )
            .when(expanded, |this| {
                this.child(
                    div()
                        .px(px(spacing::MD))
                        .pb(px(spacing::MD))
                        .text_size(px(typography::SIZE_SM))
                        .text_color(colors.text_secondary)
                        .child(bound.section.body.clone()),
                )
            })
    }
}

impl Render for Accordion {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let mut sections = Vec::with_capacity(self.sections.len());
        for index in 0..self.sections.len() {
            sections.push(self.render_section(index, &colors, cx));
        }

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .flex_col()
            .children(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Controllable;

    fn sections() -> Vec<AccordionSection> {
        vec![
            AccordionSection::new("shipping", "Shipping", "Ships in 2 days."),
            AccordionSection::new("returns", "Returns", "30 day returns."),
        ]
    }

    #[test]
    fn sections_bind_to_their_accordion() {
        let accordion = Accordion::new(
            "faq",
            AccordionState::single(Controllable::uncontrolled(Vec::new())),
            sections(),
        )
        .unwrap();

        accordion.sections[1].item.toggle();

        assert_eq!(accordion.handle().expanded(), vec!["returns".to_string()]);
        assert!(!accordion.sections[0].item.is_expanded());
    }
}
