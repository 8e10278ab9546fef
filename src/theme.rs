//! Colors used by the renderer
//!
//! The theme is part of `config.yaml`. Every color is a `#RRGGBB` or
//! `#RRGGBBAA` string and any color left out keeps its default.
//!
//! ```yaml
//! theme:
//!   editor:
//!     background: "#1E1E1E"
//!   status_bar:
//!     foreground: "#CCCCCC"
//! ```

use serde::Deserialize;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

// =============================================================================
// Raw data as parsed from YAML
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeData {
    pub editor: EditorThemeData,
    pub status_bar: StatusBarThemeData,
    pub overlay: OverlayThemeData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EditorThemeData {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub cursor_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusBarThemeData {
    pub background: Option<String>,
    pub foreground: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverlayThemeData {
    pub border: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub input_background: Option<String>,
}

// =============================================================================
// Resolved theme
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ThemeData")]
pub struct Theme {
    pub editor: EditorTheme,
    pub status_bar: StatusBarTheme,
    pub overlay: OverlayTheme,
}

/// Text area colors
#[derive(Debug, Clone, PartialEq)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub cursor_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
}

/// Colors of the search prompt
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTheme {
    pub border: Color,
    pub background: Color,
    pub foreground: Color,
    pub input_background: Color,
}

impl Theme {
    /// Default light theme, close to a native text widget
    pub fn default_light() -> Self {
        Self {
            editor: EditorTheme {
                background: Color::rgb(0xFF, 0xFF, 0xFF),
                foreground: Color::rgb(0x1E, 0x1E, 0x1E),
                cursor_color: Color::rgb(0x00, 0x00, 0x00),
            },
            status_bar: StatusBarTheme {
                background: Color::rgb(0xEE, 0xEE, 0xEE),
                foreground: Color::rgb(0x33, 0x33, 0x33),
            },
            overlay: OverlayTheme {
                border: Color::rgb(0x99, 0x99, 0x99),
                background: Color::rgb(0xF3, 0xF3, 0xF3),
                foreground: Color::rgb(0x1E, 0x1E, 0x1E),
                input_background: Color::rgb(0xFF, 0xFF, 0xFF),
            },
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Resolve raw data, falling back to the default for missing colors
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let base = Self::default_light();
        let pick = |value: Option<String>, fallback: Color| -> Result<Color, String> {
            value.map_or(Ok(fallback), |hex| Color::from_hex(&hex))
        };

        Ok(Self {
            editor: EditorTheme {
                background: pick(data.editor.background, base.editor.background)?,
                foreground: pick(data.editor.foreground, base.editor.foreground)?,
                cursor_color: pick(data.editor.cursor_color, base.editor.cursor_color)?,
            },
            status_bar: StatusBarTheme {
                background: pick(data.status_bar.background, base.status_bar.background)?,
                foreground: pick(data.status_bar.foreground, base.status_bar.foreground)?,
            },
            overlay: OverlayTheme {
                border: pick(data.overlay.border, base.overlay.border)?,
                background: pick(data.overlay.background, base.overlay.background)?,
                foreground: pick(data.overlay.foreground, base.overlay.foreground)?,
                input_background: pick(
                    data.overlay.input_background,
                    base.overlay.input_background,
                )?,
            },
        })
    }
}

impl TryFrom<ThemeData> for Theme {
    type Error = String;

    fn try_from(data: ThemeData) -> Result<Self, Self::Error> {
        Self::from_data(data)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}
