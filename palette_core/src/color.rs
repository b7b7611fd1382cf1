use serde::{Deserialize, Serialize};

/// 16-bit packed RGB565 value: red in bits 15..11, green 10..5, blue 4..0.
pub type PackedColor = u16;

/// 8-bit-per-channel color as delivered by the palette source.
/// Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_rgb565(self) -> PackedColor {
        pack(self)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Reduce each channel by truncation (5/6/5 bits) and pack red high, blue low.
pub const fn pack(color: Color) -> PackedColor {
    let red = (color.r >> 3) as u16;
    let green = (color.g >> 2) as u16;
    let blue = (color.b >> 3) as u16;
    (red << 11) | (green << 5) | blue
}
