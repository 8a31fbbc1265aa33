#![forbid(unsafe_code)]

//! RGBA color with the interpolation the animation layer needs.
//!
//! Colors are 8-bit-per-channel, non-premultiplied. The only operations the
//! core performs on them are linear blending (keyed on a timer's progress)
//! and uniform dimming; rasterization is the renderer's problem.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Opaque color from red/green/blue.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from red/green/blue/alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear blend between `self` and `other`.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` yields `self`, `t = 1` yields
    /// `other`. All four channels blend, alpha included.
    #[must_use]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 { (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8 };
        Color {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }

    /// Scale all channels by `factor` (clamped to `[0, 1]`).
    ///
    /// This is the "dim a palette entry" operation; it scales alpha too, the
    /// way the host engine's color-scalar multiply behaves.
    #[must_use]
    pub fn scale(self, factor: f32) -> Color {
        let f = factor.clamp(0.0, 1.0);
        let ch = |v: u8| -> u8 { (f32::from(v) * f).round() as u8 };
        Color {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: ch(self.a),
        }
    }
}
