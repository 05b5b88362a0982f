//! Color representation

use std::fmt;

/// A color as written in `fo:color` / `fo:background-color` attributes
///
/// ODF colors are `#rrggbb`; backgrounds additionally accept `transparent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No color (only meaningful for backgrounds)
    #[default]
    Transparent,

    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb { r, g, b })
    }

    /// Convert to the `#rrggbb` form, or `None` for [`Color::Transparent`]
    pub fn to_hex(&self) -> Option<String> {
        match self {
            Color::Transparent => None,
            Color::Rgb { r, g, b } => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        }
    }

    /// Check if this is the transparent color
    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Transparent)
    }

    // Common colors
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
    pub const GRAY: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const LIGHT_GRAY: Color = Color::Rgb {
        r: 211,
        g: 211,
        b: 211,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => f.write_str("transparent"),
            Color::Rgb { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("zz0000"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_hex().as_deref(), Some("#ab01ff"));
        assert_eq!(Color::Transparent.to_hex(), None);
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(Color::Transparent.to_string(), "transparent");
    }
}
