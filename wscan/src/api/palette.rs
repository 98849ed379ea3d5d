//! Display colors used by the classifier.
//!
//! A [`Palette`] is loaded once at startup and handed to whatever builds
//! records. It is never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::api::models::ScanError;
use crate::Result;

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Returns the color as a fully opaque `0xAARRGGBB` value.
    pub fn argb(&self) -> u32 {
        0xff00_0000 | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl FromStr for Rgb {
    type Err = ScanError;

    /// Parses `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ScanError::InvalidColor(s.to_string()));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ScanError::InvalidColor(s.to_string()))?;
        Ok(Self::from_hex(value))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ScanError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Named colors the classifier paints record fields with.
///
/// Any key missing from a palette file keeps its default value.
///
/// # Example
///
/// ```
/// use wscan::Palette;
///
/// let palette = Palette::from_toml_str("green = \"#00ff00\"").unwrap();
/// assert_eq!(palette.green.to_string(), "#00ff00");
/// assert_eq!(palette.grey, Palette::default().grey);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Neutral text: BSSID, non-hidden ESSID, 2.4 GHz channels, plain ciphers.
    pub grey: Rgb,
    /// Channels at or above 4915 MHz.
    pub blue_light: Rgb,
    /// Open networks.
    pub green: Rgb,
    /// WPA and WPA2 networks.
    pub yellow_middle: Rgb,
    /// WEP networks.
    pub sky_light: Rgb,
    /// Enterprise (EAP) networks.
    pub red_light: Rgb,
    /// TKIP with pre-authentication.
    pub sky: Rgb,
    /// TKIP without pre-authentication.
    pub sky_white: Rgb,
    /// WPS available.
    pub green_high: Rgb,
    /// WPS unavailable.
    pub red_high: Rgb,
    /// Hidden network name.
    pub yellow: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grey: Rgb::from_hex(0x9e9e9e),
            blue_light: Rgb::from_hex(0x64b5f6),
            green: Rgb::from_hex(0x4caf50),
            yellow_middle: Rgb::from_hex(0xfbc02d),
            sky_light: Rgb::from_hex(0x81d4fa),
            red_light: Rgb::from_hex(0xef5350),
            sky: Rgb::from_hex(0x29b6f6),
            sky_white: Rgb::from_hex(0xb3e5fc),
            green_high: Rgb::from_hex(0x00e676),
            red_high: Rgb::from_hex(0xff1744),
            yellow: Rgb::from_hex(0xffeb3b),
        }
    }
}

impl Palette {
    /// Parses a palette from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a palette from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let palette = Self::from_toml_str(&text)?;
        log::debug!("Loaded palette from {}", path.as_ref().display());
        Ok(palette)
    }
}
