//! Color palettes and ANSI escape sequence generation.
//!
//! A [`Theme`] resolves the abstract [`StatusTone`] of a status badge to a concrete
//! color, so every view draws a status the same way. Themes are either built in or
//! loaded from a TOML file.
//!
//! # Built-in Themes
//!
//! - `luxury-dark`: gold on black (default)
//! - `daylight`: light variant
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! primary = "#D4AF37"
//! text_muted = "#6B7280"
//! success = "#10B981"
//! accent = "#E74C3C"
//! warning = "#F59E0B"
//! ```

use crate::domain::error::{Result, ShowroomError};
use crate::domain::{StatusTone, VehicleStatus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const LUXURY_DARK: &str = include_str!("../../themes/luxury-dark.toml");
const DAYLIGHT: &str = include_str!("../../themes/daylight.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Palette entries, all hex strings such as `"#D4AF37"`.
///
/// Unknown keys in theme files are ignored, so richer palettes written for the
/// app's other surfaces still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Brand color: headers and the filter badge.
    pub primary: String,
    /// Secondary text; also used for statuses with no known tone.
    pub text_muted: String,

    pub success: String,
    pub accent: String,
    pub warning: String,
}

impl Theme {
    /// Loads a built-in theme by name. Unknown names yield `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use showroom::ui::Theme;
    ///
    /// let theme = Theme::from_name("daylight").unwrap();
    /// assert_eq!(theme.name, "daylight");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "luxury-dark" => LUXURY_DARK,
            "daylight" => DAYLIGHT,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ShowroomError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ShowroomError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Color for a badge tone.
    #[must_use]
    pub fn tone_color(&self, tone: StatusTone) -> &str {
        match tone {
            StatusTone::Success => &self.colors.success,
            StatusTone::Accent => &self.colors.accent,
            StatusTone::Warning => &self.colors.warning,
            StatusTone::Muted => &self.colors.text_muted,
        }
    }

    #[must_use]
    pub fn status_color(&self, status: VehicleStatus) -> &str {
        self.tone_color(status.tone())
    }

    /// Parses `#rrggbb`; anything malformed becomes white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `luxury-dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("luxury-dark").expect("built-in luxury-dark theme should always parse")
    }
}
