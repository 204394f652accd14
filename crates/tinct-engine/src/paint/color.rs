use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A color packed as `0xAARRGGBB`.
///
/// Invariant:
/// - alpha is carried through untouched but ignored by every computation in
///   this crate; renderers treat all colors as fully opaque.
///
/// `#[repr(transparent)]` over `u32`, so a `Color` is plain old data.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from straight channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB with alpha forced to `0xFF`.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self(self.0 | 0xFF00_0000)
    }

    /// Per-channel linear blend from `self` towards `other` by `num / den`,
    /// in integer arithmetic truncating towards `self`.
    ///
    /// `num == 0` yields `self`, `num == den` yields `other` (both opaque).
    /// `den == 0` is treated as `num == 0`.
    pub fn lerp_rgb(self, other: Color, num: u32, den: u32) -> Color {
        if den == 0 {
            return self.opaque();
        }
        let num = num.min(den) as i32;
        let den = den as i32;
        let mix = |from: u8, to: u8| {
            let from = from as i32;
            (from + (to as i32 - from) * num / den) as u8
        };
        Color::from_rgb(
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
        )
    }

    /// Multiplies the RGB channels by `num / den` (rounded), pulling the color
    /// towards black. Result is opaque.
    pub fn scale_rgb(self, num: u32, den: u32) -> Color {
        if den == 0 {
            return Color::BLACK;
        }
        let num = num.min(den);
        let scale = |c: u8| ((c as u32 * num + den / 2) / den) as u8;
        Color::from_rgb(scale(self.red()), scale(self.green()), scale(self.blue()))
    }

    /// Straight `[r, g, b, a]` bytes, as image encoders expect them.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Parses `rrggbb`, `#rrggbb` or `#aarrggbb` (case insensitive).
    ///
    /// Six-digit forms are opaque.
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let value = u32::from_str_radix(hex, 16)
            .ok()
            .filter(|_| hex.chars().all(|c| c.is_ascii_hexdigit()));
        match (hex.len(), value) {
            (6, Some(v)) => Ok(Color(0xFF00_0000 | v)),
            (8, Some(v)) => Ok(Color(v)),
            (6 | 8, None) => Err(ColorParseError::Digits(s.to_owned())),
            (n, _) => Err(ColorParseError::Length(n)),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

/// A hex color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let c = Color(0x80FF_8040);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0xFF, 0x80, 0x40));
        assert_eq!(Color::from_argb(0x80, 0xFF, 0x80, 0x40), c);
        assert_eq!(c.to_rgba_bytes(), [0xFF, 0x80, 0x40, 0x80]);
    }

    #[test]
    fn opaque_forces_alpha_only() {
        assert_eq!(Color(0x1234_5678).opaque(), Color(0xFF34_5678));
    }

    #[test]
    fn lerp_endpoints() {
        let base = Color::from_rgb(10, 200, 90);
        assert_eq!(Color::WHITE.lerp_rgb(base, 0, 255), Color::WHITE);
        assert_eq!(Color::WHITE.lerp_rgb(base, 255, 255), base);
        assert_eq!(Color::WHITE.lerp_rgb(base, 7, 0), Color::WHITE);
    }

    #[test]
    fn lerp_truncates_towards_start() {
        // 255 + (0 - 255) * 1 / 2 = 255 - 127 (truncated towards the start).
        let mid = Color::WHITE.lerp_rgb(Color::BLACK, 1, 2);
        assert_eq!(mid.red(), 128);
        let mid = Color::BLACK.lerp_rgb(Color::WHITE, 1, 2);
        assert_eq!(mid.red(), 127);
    }

    #[test]
    fn scale_rgb_pulls_towards_black() {
        let c = Color::from_rgb(255, 128, 0);
        assert_eq!(c.scale_rgb(255, 255), c);
        assert_eq!(c.scale_rgb(0, 255), Color::BLACK);
        assert_eq!(c.scale_rgb(1, 2), Color::from_rgb(128, 64, 0));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!("#ff8800".parse::<Color>(), Ok(Color(0xFFFF_8800)));
        assert_eq!(Color::from_hex("FF8800"), Ok(Color(0xFFFF_8800)));
        assert_eq!(Color::from_hex("#80ff8800"), Ok(Color(0x80FF_8800)));
        assert_eq!(Color::from_hex("#fff"), Err(ColorParseError::Length(3)));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ColorParseError::Digits(_))));
        assert!(matches!(Color::from_hex("+f0000"), Err(ColorParseError::Digits(_))));
    }

    #[test]
    fn display_is_upper_hex_argb() {
        assert_eq!(Color(0xFF12_ab34).to_string(), "#FF12AB34");
        assert_eq!(format!("{:?}", Color::BLACK), "Color(#FF000000)");
    }
}
