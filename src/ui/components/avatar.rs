//! Avatar component.
//!
//! Displays a user image, falling back to initials on a seeded color.

use gpui::{
    div, img, prelude::FluentBuilder, px, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, Styled,
};

use crate::tokens::radius;
use crate::ui::theme::ThemeColors;

/// Avatar size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    /// Small (24px).
    Small,
    /// Medium (32px).
    #[default]
    Medium,
    /// Large (40px).
    Large,
    /// Extra large (48px).
    XLarge,
}

impl AvatarSize {
    fn px(self) -> f32 {
        match self {
            AvatarSize::Small => 24.0,
            AvatarSize::Medium => 32.0,
            AvatarSize::Large => 40.0,
            AvatarSize::XLarge => 48.0,
        }
    }

    fn font_size(self) -> f32 {
        match self {
            AvatarSize::Small => 11.0,
            AvatarSize::Medium => 13.0,
            AvatarSize::Large => 16.0,
            AvatarSize::XLarge => 18.0,
        }
    }
}

/// Avatar shape options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
}

/// Presence dot in the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStatus {
    Online,
    Away,
    Busy,
    Offline,
}

/// A user avatar component.
#[derive(IntoElement)]
pub struct Avatar {
    id: ElementId,
    initials: SharedString,
    src: Option<SharedString>,
    size: AvatarSize,
    shape: AvatarShape,
    status: Option<AvatarStatus>,
    color_seed: u32,
}

impl Avatar {
    /// Create avatar from a full name, extracting initials.
    pub fn from_name(id: impl Into<ElementId>, name: &str) -> Self {
        Self {
            id: id.into(),
            initials: extract_initials(name).into(),
            src: None,
            size: AvatarSize::Medium,
            shape: AvatarShape::Circle,
            status: None,
            color_seed: name.bytes().fold(0u32, |acc, b| acc.wrapping_add(b as u32)),
        }
    }

    /// Image shown instead of the initials.
    pub fn src(mut self, src: impl Into<SharedString>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn status(mut self, status: AvatarStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn radius(&self) -> f32 {
        match self.shape {
            AvatarShape::Circle => self.size.px() / 2.0,
            AvatarShape::Square => radius::SM,
        }
    }
}

fn extract_initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.len() {
        0 => "?".to_string(),
        1 => parts[0]
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
        _ => {
            let first = parts[0].chars().next().unwrap_or('?');
            let last = parts[parts.len() - 1].chars().next().unwrap_or('?');
            format!("{}{}", first.to_uppercase(), last.to_uppercase())
        }
    }
}

fn generate_color(seed: u32) -> gpui::Hsla {
    let hue = (seed.wrapping_mul(137) % 360) as f32;
    gpui::hsla(hue / 360.0, 0.5, 0.35, 1.0)
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let size = self.size.px();
        let radius = self.radius();
        let dot = (size / 4.0).max(6.0);
        let status_color = self.status.map(|status| match status {
            AvatarStatus::Online => colors.success,
            AvatarStatus::Away => colors.warning,
            AvatarStatus::Busy => colors.error,
            AvatarStatus::Offline => colors.text_muted,
        });

        let face = match self.src {
            Some(src) => img(src.to_string())
                .size(px(size))
                .rounded(px(radius))
                .into_any_element(),
            None => div()
                .size(px(size))
                .flex()
                .items_center()
                .justify_center()
                .rounded(px(radius))
                .bg(generate_color(self.color_seed))
                .text_color(colors.text_primary)
                .text_size(px(self.size.font_size()))
                .font_weight(gpui::FontWeight::MEDIUM)
                .child(self.initials)
                .into_any_element(),
        };

        div()
            .id(self.id)
            .relative()
            .size(px(size))
            .child(face)
            .when_some(status_color, |this, color| {
                this.child(
                    div()
                        .absolute()
                        .bottom_0()
                        .right_0()
                        .size(px(dot))
                        .rounded_full()
                        .border_2()
                        .border_color(colors.background)
                        .bg(color),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_initials_single_name() {
        assert_eq!(extract_initials("Alice"), "A");
    }

    #[test]
    fn extract_initials_full_name() {
        assert_eq!(extract_initials("ada lovelace"), "AL");
        assert_eq!(extract_initials("Alice Marie Bob"), "AB");
    }

    #[test]
    fn extract_initials_empty() {
        assert_eq!(extract_initials("   "), "?");
    }

    #[test]
    fn avatar_builder() {
        let avatar = Avatar::from_name("test", "Grace Hopper")
            .size(AvatarSize::Large)
            .shape(AvatarShape::Square)
            .status(AvatarStatus::Busy);

        assert_eq!(avatar.initials.as_ref(), "GH");
        assert_eq!(avatar.radius(), radius::SM);
        assert_eq!(avatar.status, Some(AvatarStatus::Busy));
    }

    #[test]
    fn circle_radius_is_half_size() {
        let avatar = Avatar::from_name("a", "A").size(AvatarSize::XLarge);
        assert_eq!(avatar.radius(), 24.0);
    }

    #[test]
    fn color_generation_consistent() {
        assert_eq!(generate_color(42).h, generate_color(42).h);
    }
}
