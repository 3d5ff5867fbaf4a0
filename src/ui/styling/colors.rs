//! Color definitions and channel arithmetic
//!
//! Colors are 24-bit RGB values packed 8-8-8 (red in the high byte, blue in
//! the low byte). There is no alpha channel: "transparent" text backgrounds
//! are expressed as `Option<Color>::None` at the call site.
//!
//! The shading helpers ([`darken`], [`lighten`], [`blend`]) truncate toward
//! zero and clamp every channel to `0..=255` independently, so a channel that
//! saturates never bleeds into its neighbour.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::{Deserialize, Serialize};

/// A packed 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Build a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// See [`darken`].
    pub fn darken(self, factor: f32) -> Self {
        darken(self, factor)
    }

    /// See [`lighten`].
    pub fn lighten(self, factor: f32) -> Self {
        lighten(self, factor)
    }

    /// See [`blend`].
    pub fn blend(self, other: Color, alpha: f32) -> Self {
        blend(self, other, alpha)
    }
}

impl From<Color> for Rgb888 {
    fn from(color: Color) -> Self {
        Rgb888::new(color.r(), color.g(), color.b())
    }
}

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Color::from_rgb(color.r(), color.g(), color.b())
    }
}

/// Scale one channel, truncating toward zero and saturating at both ends.
#[inline]
fn scale_channel(channel: u8, factor: f32) -> u8 {
    // Float-to-int `as` casts saturate and map NaN to 0.
    (channel as f32 * factor) as u8
}

/// Multiply every channel by `factor` (clamped to `0.0..=1.0`).
///
/// `darken(c, 1.0) == c` and `darken(c, 0.0)` is black.
pub fn darken(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    Color::from_rgb(
        scale_channel(color.r(), factor),
        scale_channel(color.g(), factor),
        scale_channel(color.b(), factor),
    )
}

/// Multiply every channel by `factor` (at least `1.0`), clamping each channel
/// to 255 on its own.
///
/// Channels saturate at different points, so large factors shift the hue
/// toward white unevenly.
pub fn lighten(color: Color, factor: f32) -> Color {
    let factor = factor.max(1.0);
    Color::from_rgb(
        scale_channel(color.r(), factor),
        scale_channel(color.g(), factor),
        scale_channel(color.b(), factor),
    )
}

/// Linear per-channel interpolation `a * (1 - alpha) + b * alpha`.
///
/// No gamma correction. `alpha` is clamped to `0.0..=1.0`.
pub fn blend(a: Color, b: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |ca: u8, cb: u8| -> u8 { (ca as f32 * (1.0 - alpha) + cb as f32 * alpha) as u8 };
    Color::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Blend factor for row `row` of a sheen band `band_height` rows tall.
///
/// Fades linearly from `strength` at the top row toward zero at the bottom.
pub fn sheen_alpha(row: u32, band_height: u32, strength: f32) -> f32 {
    if band_height == 0 {
        return 0.0;
    }
    strength * (1.0 - row as f32 / band_height as f32)
}

// ============================================================================
// Base Colors
// ============================================================================

pub const BLACK: Color = Color::new(0x000000);
pub const WHITE: Color = Color::new(0xFFFFFF);
pub const RED: Color = Color::new(0xFF0000);
pub const GREEN: Color = Color::new(0x00FF00);
pub const BLUE: Color = Color::new(0x0000FF);
pub const YELLOW: Color = Color::new(0xFFFF00);
pub const CYAN: Color = Color::new(0x00FFFF);
pub const MAGENTA: Color = Color::new(0xFF00FF);
pub const ORANGE: Color = Color::new(0xFF8000);
pub const PURPLE: Color = Color::new(0x8000FF);

// ============================================================================
// Gray Ramp
// ============================================================================

pub const GRAY_DARK: Color = Color::new(0x404040);

/// Neutral gray, also the flat face color of every disabled control.
pub const GRAY: Color = Color::new(0x808080);
pub const GRAY_LIGHT: Color = Color::new(0xC0C0C0);
pub const GRAY_LIGHTER: Color = Color::new(0xE0E0E0);

// ============================================================================
// Button Faces
// ============================================================================

pub const BTN_PRIMARY: Color = Color::new(0x0066CC);
pub const BTN_SUCCESS: Color = Color::new(0x00AA00);
pub const BTN_WARNING: Color = Color::new(0xFF8800);
pub const BTN_DANGER: Color = Color::new(0xCC0000);
pub const BTN_DEFAULT: Color = GRAY;

/// Substituted for the configured face color whenever a control is disabled.
pub const DISABLED_FACE: Color = GRAY;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Color; 6] = [
        BLACK,
        WHITE,
        BTN_PRIMARY,
        BTN_WARNING,
        Color::new(0x123456),
        Color::new(0xFE01FF),
    ];

    #[test]
    fn test_channels_unpack() {
        let c = Color::new(0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_rgb(0x12, 0x34, 0x56), c);
        assert_eq!(Color::new(0xFF12_3456).raw(), 0x123456);
    }

    #[test]
    fn test_darken_identity_and_black() {
        for c in SAMPLES {
            assert_eq!(darken(c, 1.0), c);
            assert_eq!(darken(c, 0.0), BLACK);
        }
    }

    #[test]
    fn test_darken_truncates() {
        // 0x66 * 0.6 = 61.2, 0xCC * 0.6 = 122.4
        assert_eq!(darken(BTN_PRIMARY, 0.6), Color::from_rgb(0, 61, 122));
    }

    #[test]
    fn test_lighten_clamps_each_channel() {
        for c in SAMPLES {
            for factor in [1.0, 1.2, 1.3, 2.0, 10.0] {
                let l = lighten(c, factor);
                assert!(l.r() >= c.r() && l.g() >= c.g() && l.b() >= c.b());
            }
        }
        // Red saturates while green keeps scaling
        let shifted = lighten(Color::from_rgb(200, 100, 0), 1.5);
        assert_eq!(shifted, Color::from_rgb(255, 150, 0));
    }

    #[test]
    fn test_blend_endpoints() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(blend(a, b, 0.0), a);
                assert_eq!(blend(a, b, 1.0), b);
            }
        }
    }

    #[test]
    fn test_blend_midpoint_and_clamped_alpha() {
        assert_eq!(blend(BLACK, WHITE, 0.5), Color::from_rgb(127, 127, 127));
        assert_eq!(blend(BLACK, WHITE, 3.0), WHITE);
        assert_eq!(blend(BLACK, WHITE, -1.0), BLACK);
    }

    #[test]
    fn test_sheen_alpha_fades() {
        assert_eq!(sheen_alpha(0, 10, 0.6), 0.6);
        assert!(sheen_alpha(9, 10, 0.6) < sheen_alpha(1, 10, 0.6));
        assert_eq!(sheen_alpha(0, 0, 0.6), 0.0);
    }

    #[test]
    fn test_rgb888_conversion() {
        let c = Color::new(0xAB_CD_EF);
        let eg: Rgb888 = c.into();
        assert_eq!(Color::from(eg), c);
    }
}
