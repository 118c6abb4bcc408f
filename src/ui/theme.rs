//! Theme definitions built from the design tokens.

use gpui::{rgb, rgba, App, Global, Hsla};

use crate::config::Theme as ThemeSetting;
use crate::notifications::ToastVariant;
use crate::tokens::palette;

/// Color palette for the components
#[derive(Clone, Debug)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,
    pub overlay: Hsla,

    // Text
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_on_accent: Hsla,

    // Borders
    pub border: Hsla,
    pub border_focused: Hsla,

    // Accents
    pub accent: Hsla,
    pub accent_hover: Hsla,

    // Status colors
    pub information: Hsla,
    pub success: Hsla,
    pub warning: Hsla,
    pub error: Hsla,

    // Status surfaces
    pub information_subtle: Hsla,
    pub success_subtle: Hsla,
    pub warning_subtle: Hsla,
    pub error_subtle: Hsla,
}

impl ThemeColors {
    /// Dark theme colors
    pub fn dark() -> Self {
        Self {
            background: rgb(palette::NEUTRAL_950).into(),
            surface: rgb(palette::NEUTRAL_900).into(),
            surface_elevated: rgb(palette::NEUTRAL_800).into(),
            overlay: rgba(0x000000aa).into(),

            text_primary: rgb(palette::NEUTRAL_50).into(),
            text_secondary: rgb(palette::NEUTRAL_400).into(),
            text_muted: rgb(palette::NEUTRAL_500).into(),
            text_on_accent: rgb(palette::WHITE).into(),

            border: rgb(palette::NEUTRAL_700).into(),
            border_focused: rgb(palette::BRAND_500).into(),

            accent: rgb(palette::BRAND_600).into(),
            accent_hover: rgb(palette::BRAND_500).into(),

            information: rgb(palette::INFORMATION_500).into(),
            success: rgb(palette::SUCCESS_500).into(),
            warning: rgb(palette::WARNING_500).into(),
            error: rgb(palette::ERROR_500).into(),

            information_subtle: rgb(palette::INFORMATION_700).into(),
            success_subtle: rgb(palette::SUCCESS_700).into(),
            warning_subtle: rgb(palette::WARNING_700).into(),
            error_subtle: rgb(palette::ERROR_700).into(),
        }
    }

    /// Light theme colors
    pub fn light() -> Self {
        Self {
            background: rgb(palette::WHITE).into(),
            surface: rgb(palette::NEUTRAL_50).into(),
            surface_elevated: rgb(palette::WHITE).into(),
            overlay: rgba(0x00000066).into(),

            text_primary: rgb(palette::NEUTRAL_900).into(),
            text_secondary: rgb(palette::NEUTRAL_600).into(),
            text_muted: rgb(palette::NEUTRAL_400).into(),
            text_on_accent: rgb(palette::WHITE).into(),

            border: rgb(palette::NEUTRAL_200).into(),
            border_focused: rgb(palette::BRAND_600).into(),

            accent: rgb(palette::BRAND_600).into(),
            accent_hover: rgb(palette::BRAND_700).into(),

            information: rgb(palette::INFORMATION_700).into(),
            success: rgb(palette::SUCCESS_700).into(),
            warning: rgb(palette::WARNING_700).into(),
            error: rgb(palette::ERROR_700).into(),

            information_subtle: rgb(palette::INFORMATION_100).into(),
            success_subtle: rgb(palette::SUCCESS_100).into(),
            warning_subtle: rgb(palette::WARNING_100).into(),
            error_subtle: rgb(palette::ERROR_100).into(),
        }
    }

    /// Colors of the installed [`Theme`], dark if none is installed.
    pub fn current(cx: &App) -> Self {
        cx.try_global::<Theme>()
            .map(|theme| theme.colors.clone())
            .unwrap_or_else(Self::dark)
    }

    /// Accent and subtle surface for a status variant.
    pub fn status(&self, variant: ToastVariant) -> (Hsla, Hsla) {
        match variant {
            ToastVariant::Neutral => (self.text_secondary, self.surface_elevated),
            ToastVariant::Information => (self.information, self.information_subtle),
            ToastVariant::Success => (self.success, self.success_subtle),
            ToastVariant::Warning => (self.warning, self.warning_subtle),
            ToastVariant::Error => (self.error, self.error_subtle),
        }
    }
}

/// Theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Component theme, installed as a gpui global.
#[derive(Clone, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Global for Theme {}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeSetting> for Theme {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Dark => Self::dark(),
            ThemeSetting::Light => Self::light(),
        }
    }
}

impl Theme {
    /// Create dark theme
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ThemeColors::dark(),
        }
    }

    /// Create light theme
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ThemeColors::light(),
        }
    }

    /// Toggle between light and dark
    pub fn toggle(&mut self) {
        match self.mode {
            ThemeMode::Dark => *self = Self::light(),
            ThemeMode::Light => *self = Self::dark(),
        }
    }
}
