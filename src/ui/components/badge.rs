//! Badge component.
//!
//! Displays status labels and counts.

use gpui::{
    div, px, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled,
};

use crate::tokens::{radius, typography};
use crate::ui::theme::ThemeColors;

/// Badge variant styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default neutral badge.
    #[default]
    Neutral,
    /// Brand accent badge.
    Brand,
    Information,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    fn colors(self, colors: &ThemeColors) -> (Hsla, Hsla) {
        match self {
            BadgeVariant::Neutral => (colors.surface_elevated, colors.text_secondary),
            BadgeVariant::Brand => (colors.accent, colors.text_on_accent),
            BadgeVariant::Information => (colors.information_subtle, colors.information),
            BadgeVariant::Success => (colors.success_subtle, colors.success),
            BadgeVariant::Warning => (colors.warning_subtle, colors.warning),
            BadgeVariant::Error => (colors.error_subtle, colors.error),
        }
    }
}

/// Badge size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    /// Small badge (16px height).
    Small,
    /// Medium badge (20px height).
    #[default]
    Medium,
    /// Large badge (24px height).
    Large,
}

impl BadgeSize {
    fn height(self) -> f32 {
        match self {
            BadgeSize::Small => 16.0,
            BadgeSize::Medium => 20.0,
            BadgeSize::Large => 24.0,
        }
    }

    fn font_size(self) -> f32 {
        match self {
            BadgeSize::Small => 10.0,
            BadgeSize::Medium => typography::SIZE_XS,
            BadgeSize::Large => typography::SIZE_SM,
        }
    }

    fn padding_x(self) -> f32 {
        match self {
            BadgeSize::Small => 4.0,
            BadgeSize::Medium => 6.0,
            BadgeSize::Large => 8.0,
        }
    }
}

/// A badge component for status indicators.
#[derive(IntoElement)]
pub struct Badge {
    id: ElementId,
    label: SharedString,
    variant: BadgeVariant,
    size: BadgeSize,
    pill: bool,
}

impl Badge {
    /// Create a new badge with the given label.
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: BadgeVariant::Neutral,
            size: BadgeSize::Medium,
            pill: false,
        }
    }

    /// Set the badge variant.
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the badge size.
    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Make the badge pill-shaped (fully rounded).
    pub fn pill(mut self) -> Self {
        self.pill = true;
        self
    }

    fn radius(&self) -> f32 {
        if self.pill {
            self.size.height() / 2.0
        } else {
            radius::SM
        }
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let (bg, text_color) = self.variant.colors(&colors);
        let radius = self.radius();

        div()
            .id(self.id)
            .h(px(self.size.height()))
            .px(px(self.size.padding_x()))
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(radius))
            .bg(bg)
            .text_color(text_color)
            .text_size(px(self.size.font_size()))
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(self.label)
    }
}

/// A count badge, e.g. unread items.
#[derive(IntoElement)]
pub struct CountBadge {
    id: ElementId,
    count: u32,
    max_count: u32,
    variant: BadgeVariant,
}

impl CountBadge {
    /// Create a new count badge.
    pub fn new(id: impl Into<ElementId>, count: u32) -> Self {
        Self {
            id: id.into(),
            count,
            max_count: 99,
            variant: BadgeVariant::Brand,
        }
    }

    /// Set the maximum displayable count (shows "99+" if exceeded).
    pub fn max_count(mut self, max: u32) -> Self {
        self.max_count = max;
        self
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    fn label(&self) -> String {
        if self.count > self.max_count {
            format!("{}+", self.max_count)
        } else {
            self.count.to_string()
        }
    }
}

impl RenderOnce for CountBadge {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let (bg, text_color) = self.variant.colors(&colors);
        let height = BadgeSize::Small.height();
        let label = self.label();

        div()
            .id(self.id)
            .h(px(height))
            .min_w(px(height))
            .px(px(4.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(bg)
            .text_color(text_color)
            .text_size(px(BadgeSize::Small.font_size()))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .child(label)
    }
}
