use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit sRGB color. Serialized as a `#RRGGBB` hex string so the host page
/// can configure palettes in the same notation as its stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS color string with the given opacity (0.0..=1.0).
    pub fn css(self, alpha: f64) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            self.to_hex()
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgb::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color `{hex}`, expected #RRGGBB")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#F6E27F"), Some(Rgb::new(0xF6, 0xE2, 0x7F)));
        assert_eq!(Rgb::from_hex("a0a0a0"), Some(Rgb::new(0xA0, 0xA0, 0xA0)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn css_uses_rgba_below_full_opacity() {
        let c = Rgb::new(255, 217, 123);
        assert_eq!(c.css(1.0), "#FFD97B");
        assert_eq!(c.css(0.0), "rgba(255, 217, 123, 0.000)");
        assert_eq!(c.css(0.5), "rgba(255, 217, 123, 0.500)");
    }

    #[test]
    fn deserializes_from_json_string() {
        let c: Rgb = serde_json::from_str("\"#E8EEF8\"").unwrap();
        assert_eq!(c, Rgb::new(0xE8, 0xEE, 0xF8));
        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }
}
