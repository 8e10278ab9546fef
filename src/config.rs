//! Editor configuration
//!
//! Read from `~/.config/notepad/config.yaml`. Every field is optional; a
//! missing or broken file means defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::theme::Theme;

/// Editor configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Monospace TTF/OTF font to render with (system font if unset)
    pub font_path: Option<PathBuf>,
    /// Font size in points
    pub font_size: f32,
    /// Initial window width in logical pixels
    pub window_width: u32,
    /// Initial window height in logical pixels
    pub window_height: u32,
    /// Number of spaces the Tab key inserts
    pub tab_width: usize,
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: 12.0,
            window_width: 600,
            window_height: 900,
            tab_width: 4,
            theme: Theme::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Parse config from YAML text. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self, String> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(format!("font_size must be positive, got {}", self.font_size));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err("window size must be non-zero".to_string());
        }
        self.tab_width = self.tab_width.clamp(1, 16);
        Ok(self)
    }
}
