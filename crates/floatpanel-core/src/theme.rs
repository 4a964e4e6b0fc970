//! Fixed dark-theme palette shared by every panel rendition.

use peniko::Color;

/// Colors of the floating panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Drag bar / header background.
    pub header: Color,
    /// Body border and control button outline.
    pub border: Color,
    /// Body background.
    pub background: Color,
    /// Content text.
    pub accent_text: Color,
    /// Window counter label.
    pub title_text: Color,
    pub minimize: Color,
    pub maximize: Color,
    pub close: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        header: Color::from_rgb8(0x62, 0x72, 0xa4),
        border: Color::from_rgb8(0x44, 0x47, 0x5a),
        background: Color::from_rgb8(0x28, 0x2a, 0x36),
        accent_text: Color::from_rgb8(0x50, 0xfa, 0x7b),
        title_text: Color::from_rgb8(0xf8, 0xf8, 0xf2),
        minimize: Color::from_rgb8(0xf1, 0xfa, 0x8c),
        maximize: Color::from_rgb8(0x50, 0xfa, 0x7b),
        close: Color::from_rgb8(0xff, 0x55, 0x55),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}

/// Format a color as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when translucent).
pub fn css(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}
