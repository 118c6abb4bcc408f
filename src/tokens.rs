//! Design tokens.
//!
//! Static constant tables shared by every component: colors, spacing,
//! radii, typography, shadows, motion and z-index layers. Colors are
//! `0xRRGGBB` values consumed through `gpui::rgb`; sizes are pixels.
//!
//! Tokens are pure data. Components pick from them through
//! [`crate::ui::theme::ThemeColors`] rather than hard-coding values.

// ============================================================================
// Color palette
// ============================================================================

pub mod palette {
    // Neutral scale (zinc)
    pub const WHITE: u32 = 0xffffff;
    pub const BLACK: u32 = 0x000000;
    pub const NEUTRAL_50: u32 = 0xfafafa;
    pub const NEUTRAL_100: u32 = 0xf4f4f5;
    pub const NEUTRAL_200: u32 = 0xe4e4e7;
    pub const NEUTRAL_300: u32 = 0xd4d4d8;
    pub const NEUTRAL_400: u32 = 0xa1a1aa;
    pub const NEUTRAL_500: u32 = 0x71717a;
    pub const NEUTRAL_600: u32 = 0x52525b;
    pub const NEUTRAL_700: u32 = 0x3f3f46;
    pub const NEUTRAL_800: u32 = 0x27272a;
    pub const NEUTRAL_900: u32 = 0x18181b;
    pub const NEUTRAL_950: u32 = 0x09090b;

    // Brand (blue)
    pub const BRAND_100: u32 = 0xdbeafe;
    pub const BRAND_300: u32 = 0x93c5fd;
    pub const BRAND_500: u32 = 0x3b82f6;
    pub const BRAND_600: u32 = 0x2563eb;
    pub const BRAND_700: u32 = 0x1d4ed8;

    // Status
    pub const INFORMATION_100: u32 = 0xe0f2fe;
    pub const INFORMATION_500: u32 = 0x0ea5e9;
    pub const INFORMATION_700: u32 = 0x0369a1;
    pub const SUCCESS_100: u32 = 0xdcfce7;
    pub const SUCCESS_500: u32 = 0x22c55e;
    pub const SUCCESS_700: u32 = 0x15803d;
    pub const WARNING_100: u32 = 0xfef3c7;
    pub const WARNING_500: u32 = 0xf59e0b;
    pub const WARNING_700: u32 = 0xb45309;
    pub const ERROR_100: u32 = 0xfee2e2;
    pub const ERROR_500: u32 = 0xef4444;
    pub const ERROR_700: u32 = 0xb91c1c;
}

// ============================================================================
// Spacing scale (4px grid)
// ============================================================================

pub mod spacing {
    pub const NONE: f32 = 0.0;
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const XXL: f32 = 32.0;
    pub const XXXL: f32 = 48.0;
}

// ============================================================================
// Border radii
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const XL: f32 = 12.0;
    /// Large enough to turn any component into a pill or circle.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const FONT_FAMILY: &str = "Inter";
    pub const FONT_FAMILY_MONO: &str = "JetBrains Mono";

    pub const SIZE_XS: f32 = 11.0;
    pub const SIZE_SM: f32 = 12.0;
    pub const SIZE_MD: f32 = 14.0;
    pub const SIZE_LG: f32 = 16.0;
    pub const SIZE_XL: f32 = 20.0;
    pub const SIZE_XXL: f32 = 24.0;

    pub const WEIGHT_REGULAR: f32 = 400.0;
    pub const WEIGHT_MEDIUM: f32 = 500.0;
    pub const WEIGHT_SEMIBOLD: f32 = 600.0;
    pub const WEIGHT_BOLD: f32 = 700.0;

    /// Line heights as multiples of the font size.
    pub const LINE_HEIGHT_TIGHT: f32 = 1.25;
    pub const LINE_HEIGHT_NORMAL: f32 = 1.5;
    pub const LINE_HEIGHT_RELAXED: f32 = 1.75;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    /// A single drop shadow: offsets and blur in pixels, color as `0xRRGGBBAA`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Shadow {
        pub offset_x: f32,
        pub offset_y: f32,
        pub blur: f32,
        pub spread: f32,
        pub color: u32,
    }

    pub const SM: Shadow = Shadow {
        offset_x: 0.0,
        offset_y: 1.0,
        blur: 2.0,
        spread: 0.0,
        color: 0x0000000d,
    };
    pub const MD: Shadow = Shadow {
        offset_x: 0.0,
        offset_y: 4.0,
        blur: 6.0,
        spread: -1.0,
        color: 0x0000001a,
    };
    pub const LG: Shadow = Shadow {
        offset_x: 0.0,
        offset_y: 10.0,
        blur: 15.0,
        spread: -3.0,
        color: 0x0000001a,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    pub const INSTANT: Duration = Duration::from_millis(0);
    pub const FAST: Duration = Duration::from_millis(100);
    pub const NORMAL: Duration = Duration::from_millis(200);
    pub const SLOW: Duration = Duration::from_millis(300);

    /// Default lifetime of a toast before it dismisses itself.
    pub const TOAST_DURATION: Duration = Duration::from_millis(5000);
}

// ============================================================================
// Z-index layers
// ============================================================================

pub mod z_index {
    pub const BASE: u16 = 0;
    pub const DROPDOWN: u16 = 1000;
    pub const STICKY: u16 = 1100;
    pub const OVERLAY: u16 = 1300;
    pub const MODAL: u16 = 1400;
    pub const POPOVER: u16 = 1500;
    pub const TOAST: u16 = 1700;
    pub const TOOLTIP: u16 = 1800;
}

/// Gap in pixels between a floating panel and its trigger.
pub const FLOATING_GAP: f32 = 8.0;
