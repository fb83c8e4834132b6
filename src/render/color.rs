//! Packed RGBA color.
//!
//! Channels live in one `u32` at bit offsets 0 (r), 8 (g), 16 (b) and 24 (a).
use serde::{Deserialize, Serialize};

/// Scene files spell colors as `(r, g, b, a)` tuples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GRAY: Color = Color::rgb(160, 160, 160);

    #[inline]
    pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::pack(r, g, b, 255)
    }

    #[inline]
    pub const fn unpack(self) -> (u8, u8, u8, u8) {
        let c = self.0;
        (c as u8, (c >> 8) as u8, (c >> 16) as u8, (c >> 24) as u8)
    }

    #[inline] pub const fn r(self) -> u8 { self.0 as u8 }
    #[inline] pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline] pub const fn b(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline] pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
}

impl From<[u8; 4]> for Color {
    fn from(px: [u8; 4]) -> Self {
        Color::pack(px[0], px[1], px[2], px[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        let (r, g, b, a) = c.unpack();
        [r, g, b, a]
    }
}
