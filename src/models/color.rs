use super::PlayerId;
use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque RGB color
///
/// Parsed from `0xRRGGBB` or `#RRGGBB`; the alpha channel is supplied at draw
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(0xff_ff_ff);
    pub const BLACK: Color = Color::from_rgb(0x00_00_00);

    #[must_use]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `0xRRGGBB`, `#RRGGBB` or bare `RRGGBB`
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if the value is not six hex digits
    pub fn parse(value: &str) -> Result<Self, SceneError> {
        let trimmed = value.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SceneError::InvalidColor(value.to_string()));
        }

        u32::from_str_radix(hex, 16)
            .map(Self::from_rgb)
            .map_err(|_| SceneError::InvalidColor(value.to_string()))
    }

    /// `#rrggbb`
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color with the given opacity, for canvas fill and stroke styles
    #[must_use]
    pub fn to_css(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = SceneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Display color per player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap(HashMap<PlayerId, Color>);

impl ColorMap {
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<Color> {
        self.0.get(&player).copied()
    }

    /// Player color, or `fallback` for players without an entry
    #[must_use]
    pub fn color_or(&self, player: PlayerId, fallback: Color) -> Color {
        self.get(player).unwrap_or(fallback)
    }
}

impl FromIterator<(PlayerId, Color)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Color)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
