//! Gallery and component defaults.
//!
//! Settings are persisted to `~/.config/kiln/settings.json` (or the
//! platform equivalent) and loaded at application startup. Missing fields
//! take their defaults, so a partial file is valid.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::floating::Placement;
use crate::notifications::{ToastDefaults, ToastPosition};
use crate::tokens::{motion, FLOATING_GAP};

const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the settings file failed.
    #[error("settings io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid JSON for [`Settings`].
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The platform reports no configuration directory.
    #[error("no configuration directory available")]
    NoConfigDir,
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visual appearance settings.
    pub appearance: AppearanceSettings,
    /// Toast defaults.
    pub toasts: ToastSettings,
    /// Popover and tooltip defaults.
    pub floating: FloatingSettings,
}

impl Settings {
    /// Default settings file location.
    pub fn default_path() -> ConfigResult<PathBuf> {
        directories::ProjectDirs::from("com", "panbanda", "kiln")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, falling back to defaults if it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Writes the settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(io_error)
    }
}

/// Visual appearance configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Color theme.
    pub theme: Theme,
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark color scheme.
    #[default]
    Dark,
    /// Light color scheme.
    Light,
}

/// Toast notification defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// Auto-dismiss delay in milliseconds; 0 keeps toasts until closed.
    pub default_duration_ms: u64,
    /// Where toasts appear when they do not pick a position.
    pub default_position: ToastPosition,
    /// Newest toasts shown per position; older ones wait.
    pub max_visible: usize,
}

impl ToastSettings {
    pub fn defaults(&self) -> ToastDefaults {
        ToastDefaults {
            duration: Duration::from_millis(self.default_duration_ms),
            position: self.default_position,
        }
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            default_duration_ms: motion::TOAST_DURATION.as_millis() as u64,
            default_position: ToastPosition::BottomRight,
            max_visible: 5,
        }
    }
}

/// Popover and tooltip defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingSettings {
    /// Distance between trigger and panel in pixels.
    pub gap: f32,
    pub default_placement: Placement,
}

impl Default for FloatingSettings {
    fn default() -> Self {
        Self {
            gap: FLOATING_GAP,
            default_placement: Placement::Bottom,
        }
    }
}
