//! Toast data: ids, variants, positions, options and entries.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokens::motion;

/// Identifier of a toast, unique among all toasts the process creates.
///
/// Ids are `<unix millis>-<random hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("{millis}-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Neutral,
    Information,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    pub const ALL: [ToastVariant; 5] = [
        ToastVariant::Neutral,
        ToastVariant::Information,
        ToastVariant::Success,
        ToastVariant::Warning,
        ToastVariant::Error,
    ];

    /// Icon shown when the toast sets none.
    pub fn default_icon(self) -> &'static str {
        match self {
            ToastVariant::Neutral => "bell",
            ToastVariant::Information => "info",
            ToastVariant::Success => "check",
            ToastVariant::Warning => "alert-triangle",
            ToastVariant::Error => "x-circle",
        }
    }
}

impl fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastVariant::Neutral => "neutral",
            ToastVariant::Information => "information",
            ToastVariant::Success => "success",
            ToastVariant::Warning => "warning",
            ToastVariant::Error => "error",
        };
        f.write_str(name)
    }
}

/// Where on screen a group of toasts stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 8] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::MiddleLeft,
        ToastPosition::MiddleRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::MiddleLeft => "middle-left",
            ToastPosition::MiddleRight => "middle-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }

    /// Whether new toasts stack upwards from the bottom edge.
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            ToastPosition::BottomLeft | ToastPosition::BottomCenter | ToastPosition::BottomRight
        )
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown toast position: {0}")]
pub struct ParsePositionError(pub String);

impl FromStr for ToastPosition {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

/// Fallbacks applied to options that leave a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDefaults {
    pub duration: Duration,
    pub position: ToastPosition,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration: motion::TOAST_DURATION,
            position: ToastPosition::default(),
        }
    }
}

/// What to show. Unset fields fall back to the store's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub variant: ToastVariant,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub duration: Option<Duration>,
    pub position: Option<ToastPosition>,
}

impl ToastOptions {
    pub fn new(variant: ToastVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn neutral(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Neutral).title(title)
    }

    pub fn information(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Information).title(title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success).title(title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning).title(title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error).title(title)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Zero keeps the toast until it is closed.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// A toast as stored: every field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: ToastId,
    pub variant: ToastVariant,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub duration: Duration,
    pub position: ToastPosition,
}

impl ToastEntry {
    pub(crate) fn resolve(
        id: ToastId,
        options: ToastOptions,
        defaults: &ToastDefaults,
        position: ToastPosition,
    ) -> Self {
        Self {
            id,
            variant: options.variant,
            title: options.title,
            description: options.description,
            icon: options.icon,
            duration: options.duration.unwrap_or(defaults.duration),
            position: options.position.unwrap_or(position),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    pub fn icon_name(&self) -> &str {
        self.icon
            .as_deref()
            .unwrap_or_else(|| self.variant.default_icon())
    }
}
