//! Icon component.
//!
//! Icons are referenced by kebab-case name (`"check"`, `"alert-triangle"`)
//! so they can travel through toast options as plain strings.

use gpui::{
    div, px, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled,
};

use crate::ui::theme::ThemeColors;

/// Icon size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSize {
    /// Extra small (12px).
    XSmall,
    /// Small (14px).
    Small,
    /// Medium (16px).
    #[default]
    Medium,
    /// Large (20px).
    Large,
}

impl IconSize {
    /// Get the pixel size.
    pub fn px(self) -> f32 {
        match self {
            IconSize::XSmall => 12.0,
            IconSize::Small => 14.0,
            IconSize::Medium => 16.0,
            IconSize::Large => 20.0,
        }
    }
}

/// Named icons used by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Bell,
    Info,
    Check,
    AlertTriangle,
    XCircle,
    Close,
    ChevronDown,
    ChevronUp,
    Minus,
}

impl IconName {
    pub fn from_name(name: &str) -> Option<Self> {
        let icon = match name {
            "bell" => IconName::Bell,
            "info" => IconName::Info,
            "check" => IconName::Check,
            "alert-triangle" => IconName::AlertTriangle,
            "x-circle" => IconName::XCircle,
            "close" => IconName::Close,
            "chevron-down" => IconName::ChevronDown,
            "chevron-up" => IconName::ChevronUp,
            "minus" => IconName::Minus,
            _ => return None,
        };
        Some(icon)
    }

    /// Get the symbol/character for this icon.
    pub fn symbol(self) -> &'static str {
        match self {
            IconName::Bell => "\u{1F514}",
            IconName::Info => "\u{2139}",
            IconName::Check => "\u{2713}",
            IconName::AlertTriangle => "\u{26A0}",
            IconName::XCircle => "\u{2716}",
            IconName::Close => "\u{2715}",
            IconName::ChevronDown => "\u{2304}",
            IconName::ChevronUp => "\u{2303}",
            IconName::Minus => "\u{2212}",
        }
    }
}

/// An icon component.
#[derive(IntoElement)]
pub struct Icon {
    id: ElementId,
    icon: SharedString,
    size: IconSize,
    color: Option<Hsla>,
}

impl Icon {
    pub fn named(id: impl Into<ElementId>, name: IconName) -> Self {
        Self {
            id: id.into(),
            icon: name.symbol().into(),
            size: IconSize::Medium,
            color: None,
        }
    }

    /// Resolves an icon by name; unknown names render the name's first
    /// character.
    pub fn from_name(id: impl Into<ElementId>, name: &str) -> Self {
        let icon: SharedString = match IconName::from_name(name) {
            Some(named) => named.symbol().into(),
            None => name.chars().next().map(String::from).unwrap_or_default().into(),
        };
        Self {
            id: id.into(),
            icon,
            size: IconSize::Medium,
            color: None,
        }
    }

    /// Set the icon size.
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set a custom color for the icon.
    pub fn color(mut self, color: Hsla) -> Self {
        self.color = Some(color);
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let size = self.size.px();
        let color = self.color.unwrap_or(colors.text_secondary);

        div()
            .id(self.id)
            .size(px(size))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .text_color(color)
            .text_size(px(size))
            .child(self.icon)
    }
}
