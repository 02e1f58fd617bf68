//! Application settings persistence
//!
//! Settings live in a JSON file in the platform config directory. Every
//! section has defaults, so a partial or missing file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Profile;
use crate::ui::breakpoint::Breakpoints;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub layout: LayoutSettings,
    pub assets: AssetSettings,
    pub network: NetworkSettings,
    pub profile: Profile,
}

/// Display and interface settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
}

/// Breakpoint thresholds in logical units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub medium_min_width: f32,
    pub expanded_class_min_width: f32,
    pub expanded_min_width: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let bp = Breakpoints::default();
        Self {
            medium_min_width: bp.medium_min,
            expanded_class_min_width: bp.expanded_class_min,
            expanded_min_width: bp.expanded_layout_min,
        }
    }
}

impl LayoutSettings {
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            medium_min: self.medium_min_width,
            expanded_class_min: self.expanded_class_min_width,
            expanded_layout_min: self.expanded_min_width,
        }
    }
}

/// Where the bundled fonts and header image are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub directory: PathBuf,
    pub regular_font: String,
    pub medium_font: String,
    pub header_image: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("assets"),
            regular_font: "fonts/AlibabaPuHuiTi-3-55-Regular.ttf".to_string(),
            medium_font: "fonts/AlibabaPuHuiTi-3-65-Medium.ttf".to_string(),
            header_image: "images/header_bg.jpg".to_string(),
        }
    }
}

impl AssetSettings {
    pub fn regular_font_path(&self) -> PathBuf {
        self.directory.join(&self.regular_font)
    }

    pub fn medium_font_path(&self) -> PathBuf {
        self.directory.join(&self.medium_font)
    }

    pub fn header_image_path(&self) -> PathBuf {
        self.directory.join(&self.header_image)
    }
}

/// HTTP client settings for the avatar download
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("homepage/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "whitescent", "Homepage")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::file_path();
        if path.is_none() {
            tracing::warn!("Could not determine config directory, using default settings");
        }
        Self::load_or_default(path.as_deref())
    }

    /// Read `path` if it exists, falling back to defaults. Never writes.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            tracing::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values that cannot work with their defaults
    pub fn sanitized(mut self) -> Self {
        let layout = LayoutSettings::default();
        for (value, default, name) in [
            (&mut self.layout.medium_min_width, layout.medium_min_width, "medium_min_width"),
            (
                &mut self.layout.expanded_class_min_width,
                layout.expanded_class_min_width,
                "expanded_class_min_width",
            ),
            (&mut self.layout.expanded_min_width, layout.expanded_min_width, "expanded_min_width"),
        ] {
            if !value.is_finite() || *value <= 0.0 {
                tracing::warn!("Invalid layout.{} {}, using {}", name, value, default);
                *value = default;
            }
        }

        if self.network.timeout_secs == 0 {
            let default = NetworkSettings::default().timeout_secs;
            tracing::warn!("network.timeout_secs must be positive, using {}", default);
            self.network.timeout_secs = default;
        }
        self
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
