use crate::error::{Error, Result};

/// An RGBA color with components between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    /// One third white.
    pub const DARK_GRAY: Color = Color::rgb(1. / 3., 1. / 3., 1. / 3.);

    /// Creates an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1. }
    }

    /// Parses a six-digit hex color like `D8000C` or `#D8000C`.
    pub fn from_hex(hex: &str) -> Result<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same as `from_hex`, for known-good constants.
    pub(crate) const fn hex(value: u32) -> Color {
        Color::rgb(
            ((value >> 16) & 0xff) as f64 / 255.,
            ((value >> 8) & 0xff) as f64 / 255.,
            (value & 0xff) as f64 / 255.,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        let c = Color::from_hex("#D8000C").unwrap();
        assert_eq!(c, Color::hex(0xD8000C));
        assert_eq!(c.r, 216. / 255.);
        assert_eq!(c.g, 0.);
        assert_eq!(c.a, 1.);

        assert_eq!(Color::from_hex("ffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(Color::from_hex("fff"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex("zz0000"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex("ÿÿÿ"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex("+F+F+F"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#-1ff00"), Err(Error::InvalidColor(_))));
    }
}
