//! Toast themes and their colors.

use crate::color::Color;

/// A named visual style for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Warning,
    Error,
    Info,
    Success,
    /// No special colors: light text on a dark background.
    #[default]
    Regular,
}

/// Text and background colors of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
}

const REGULAR: ColorPair = ColorPair {
    foreground: Color::WHITE,
    background: Color::DARK_GRAY,
};

/// Indexed by `Theme as usize`.
const THEME_COLORS: [ColorPair; 5] = [
    ColorPair {
        foreground: Color::hex(0x9F6000),
        background: Color::hex(0xFEEFB3),
    },
    ColorPair {
        foreground: Color::hex(0xD8000C),
        background: Color::hex(0xFFD2D2),
    },
    ColorPair {
        foreground: Color::hex(0x17A2B8),
        background: Color::hex(0xE2F3F9),
    },
    ColorPair {
        foreground: Color::hex(0x4F8A10),
        background: Color::hex(0xDFF2BF),
    },
    REGULAR,
];

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Warning,
        Theme::Error,
        Theme::Info,
        Theme::Success,
        Theme::Regular,
    ];

    /// Returns the colors for this theme.
    pub fn colors(self) -> ColorPair {
        THEME_COLORS[self as usize]
    }
}
