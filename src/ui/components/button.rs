//! Buttons.
//!
//! [`Button`] is a labelled action with an optional leading icon and a
//! loading state. [`IconButton`] is the square glyph-only variant used for
//! close buttons inside toasts and dialogs.

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, ElementId, Hsla, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
};

use crate::tokens::{radius, spacing, typography};
use crate::ui::components::icon::{Icon, IconName, IconSize};
use crate::ui::theme::ThemeColors;

pub(crate) type ClickHandler =
    Box<dyn Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Destructive actions.
    Danger,
    /// No fill until hovered.
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn height(self) -> f32 {
        match self {
            ButtonSize::Small => 28.0,
            ButtonSize::Medium => 32.0,
            ButtonSize::Large => 40.0,
        }
    }

    fn padding_x(self) -> f32 {
        match self {
            ButtonSize::Small => spacing::MD,
            ButtonSize::Medium => spacing::LG,
            ButtonSize::Large => spacing::XL,
        }
    }

    fn text_size(self) -> f32 {
        match self {
            ButtonSize::Small => typography::SIZE_SM,
            ButtonSize::Medium => typography::SIZE_MD,
            ButtonSize::Large => typography::SIZE_LG,
        }
    }
}

/// Colors a button renders with in its current state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ButtonStyle {
    background: Hsla,
    text: Hsla,
    border: Option<Hsla>,
    /// Background while hovered; `None` when the button is inert.
    hover: Option<Hsla>,
    opacity: f32,
}

impl ButtonStyle {
    fn resolve(variant: ButtonVariant, colors: &ThemeColors, inert: bool) -> Self {
        let (background, text, border, hover) = match variant {
            ButtonVariant::Primary => (
                colors.accent,
                colors.text_on_accent,
                None,
                colors.accent_hover,
            ),
            ButtonVariant::Secondary => (
                colors.surface_elevated,
                colors.text_primary,
                Some(colors.border),
                colors.border,
            ),
            ButtonVariant::Danger => (colors.error, colors.text_on_accent, None, colors.error),
            ButtonVariant::Ghost => (
                Hsla::transparent_black(),
                colors.text_primary,
                None,
                colors.surface_elevated,
            ),
        };

        Self {
            background,
            text,
            border,
            hover: (!inert).then_some(hover),
            opacity: if inert { 0.5 } else { 1.0 },
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    icon: Option<IconName>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            full_width: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Shows `icon` before the label.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// A loading button keeps its size, shows an ellipsis and ignores clicks.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let inert = self.is_inert();
        let style = ButtonStyle::resolve(self.variant, &colors, inert);
        let label: SharedString = if self.loading {
            format!("{}\u{2026}", self.label).into()
        } else {
            self.label
        };
        let icon_id = SharedString::from(format!("{}-icon", self.id));

        div()
            .id(self.id)
            .h(px(self.size.height()))
            .px(px(self.size.padding_x()))
            .flex()
            .items_center()
            .justify_center()
            .gap(px(spacing::XS))
            .rounded(px(radius::MD))
            .bg(style.background)
            .text_color(style.text)
            .text_size(px(self.size.text_size()))
            .opacity(style.opacity)
            .when_some(style.border, |this, border| this.border_1().border_color(border))
            .when(self.full_width, |this| this.w_full())
            .when_some(self.icon, |this, icon| {
                this.child(Icon::named(icon_id, icon).size(IconSize::Small).color(style.text))
            })
            .child(label)
            .when_some(style.hover, |this, hover| {
                this.cursor_pointer().hover(move |s| s.bg(hover))
            })
            .when_some(self.on_click.filter(|_| !inert), |this, handler| {
                this.on_click(handler)
            })
    }
}

/// A square button showing a single glyph, e.g. a close button.
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    icon: SharedString,
    size: ButtonSize,
    on_click: Option<ClickHandler>,
}

impl IconButton {
    pub fn new(id: impl Into<ElementId>, icon: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            size: ButtonSize::Small,
            on_click: None,
        }
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Side length; a little smaller than a text button of the same size.
    fn side(&self) -> f32 {
        self.size.height() - spacing::XS
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let hover_bg = colors.surface_elevated;
        let hover_text = colors.text_primary;
        let side = self.side();

        div()
            .id(self.id)
            .size(px(side))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .rounded(px(radius::SM))
            .text_color(colors.text_secondary)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg).text_color(hover_text))
            .child(self.icon)
            .when_some(self.on_click, |this, handler| this.on_click(handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_and_disabled_buttons_are_inert() {
        assert!(Button::new("save", "Save").loading(true).is_inert());
        assert!(Button::new("save", "Save").disabled(true).is_inert());
        assert!(!Button::new("save", "Save").is_inert());
    }

    #[test]
    fn inert_style_drops_hover_and_dims() {
        let colors = ThemeColors::dark();

        let live = ButtonStyle::resolve(ButtonVariant::Primary, &colors, false);
        let inert = ButtonStyle::resolve(ButtonVariant::Primary, &colors, true);

        assert_eq!(live.hover, Some(colors.accent_hover));
        assert_eq!(inert.hover, None);
        assert_eq!(inert.opacity, 0.5);
        assert_eq!(inert.background, live.background);
    }

    #[test]
    fn only_secondary_has_a_border() {
        let colors = ThemeColors::light();

        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Danger,
            ButtonVariant::Ghost,
        ] {
            assert_eq!(ButtonStyle::resolve(variant, &colors, false).border, None);
        }
        assert_eq!(
            ButtonStyle::resolve(ButtonVariant::Secondary, &colors, false).border,
            Some(colors.border)
        );
    }

    #[test]
    fn icon_button_is_smaller_than_text_button() {
        let button = IconButton::new("close", IconName::Close.symbol()).size(ButtonSize::Medium);
        assert_eq!(button.side(), 28.0);
    }
}
