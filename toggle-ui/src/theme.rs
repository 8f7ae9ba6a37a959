//! Shared visual constants for toggle-ui components
//!
//! Components reference colors and radii by name only. A [`Theme`] bundles
//! them so a host app can override the defaults, e.g. from a JSON document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Accent color for buttons and selected states
pub const BUTTON_COLOR: Color = Color::rgb(0x1b, 0xbe, 0x84);
/// Neutral tone for borders, hover tints and glows
pub const LIGHT_GRAY: Color = Color::rgb(0x64, 0x64, 0x64);
/// Background for secondary surfaces
pub const SECONDARY_DARK: Color = Color::rgb(0x25, 0x25, 0x26);
pub const DEFAULT_BORDER_RADIUS_PX: u16 = 5;

/// Hex alpha suffixes applied on top of the base colors
const HOVER_ALPHA: u8 = 0x55;
const SELECTED_TINT_ALPHA: u8 = 0x77;
const SELECTED_GLOW_ALPHA: u8 = 0x88;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as `#rrggbbaa`
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{self}{alpha:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ThemeError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                // #abc expands to #aabbcc
                let doubled: Vec<String> = hex.chars().map(|c| format!("{c}{c}")).collect();
                Ok(Self::rgb(
                    channel(&doubled[0])?,
                    channel(&doubled[1])?,
                    channel(&doubled[2])?,
                ))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Visual constants consumed by the toggle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub button_color: Color,
    pub light_gray: Color,
    pub secondary_dark: Color,
    pub border_radius_px: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            button_color: BUTTON_COLOR,
            light_gray: LIGHT_GRAY,
            secondary_dark: SECONDARY_DARK,
            border_radius_px: DEFAULT_BORDER_RADIUS_PX,
        }
    }
}

impl Theme {
    /// Load a theme override. Fields left out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Inline CSS custom properties read by the toggle stylesheet
    pub fn css_variables(&self) -> String {
        format!(
            "--toggle-border: {border}; \
             --toggle-bg: {bg}; \
             --toggle-hover-bg: {hover}; \
             --toggle-radius: {radius}px; \
             --toggle-selected-bg: {tint}; \
             --toggle-selected-glow: {glow};",
            border = self.light_gray,
            bg = self.secondary_dark,
            hover = self.light_gray.with_alpha(HOVER_ALPHA),
            radius = self.border_radius_px,
            tint = self.button_color.with_alpha(SELECTED_TINT_ALPHA),
            glow = self.light_gray.with_alpha(SELECTED_GLOW_ALPHA),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#1bbe84".parse::<Color>().unwrap(), BUTTON_COLOR);
        assert_eq!("#1BBE84".parse::<Color>().unwrap(), BUTTON_COLOR);
        assert_eq!(
            "#abc".parse::<Color>().unwrap(),
            Color::rgb(0xaa, 0xbb, 0xcc)
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "1bbe84", "#12", "#12345", "#gggggg", "#1bbe84ff", "#+1+2+3"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(ThemeError::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn alpha_is_appended_as_hex() {
        assert_eq!(LIGHT_GRAY.with_alpha(0x55), "#64646455");
        assert_eq!(Color::rgb(0, 0, 0).with_alpha(0x07), "#00000007");
    }

    #[test]
    fn css_variables_use_default_constants() {
        let css = Theme::default().css_variables();
        assert!(css.contains("--toggle-border: #646464;"));
        assert!(css.contains("--toggle-bg: #252526;"));
        assert!(css.contains("--toggle-hover-bg: #64646455;"));
        assert!(css.contains("--toggle-radius: 5px;"));
        assert!(css.contains("--toggle-selected-bg: #1bbe8477;"));
        assert!(css.contains("--toggle-selected-glow: #64646488;"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let theme = Theme::from_json(r##"{ "button_color": "#ff0000" }"##).unwrap();
        assert_eq!(theme.button_color, Color::rgb(0xff, 0, 0));
        assert_eq!(theme.light_gray, LIGHT_GRAY);
        assert_eq!(theme.border_radius_px, DEFAULT_BORDER_RADIUS_PX);
    }

    #[test]
    fn bad_json_color_is_an_error() {
        let err = Theme::from_json(r#"{ "light_gray": "grey" }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
        assert!(err.to_string().contains("grey"));
    }

    #[test]
    fn theme_serializes_colors_as_strings() {
        let json = serde_json::to_string(&Theme::default()).unwrap();
        assert!(json.contains(r##""button_color":"#1bbe84""##));
    }
}
