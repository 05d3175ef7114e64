// SPDX-License-Identifier: MIT
//
// huegen color model — the two value types every generator speaks.
//
// `Rgb` is the additive display color (8 bits per channel) that all
// generators return. `Hsb` is the cylindrical hue/saturation/brightness
// form the generators sample in. Both are plain `Copy` values: no
// identity, no shared state, freshly built by the call that returns them.
//
// Hue is a circular coordinate on [0, 1): 0.0 and 1.0 are the same angle.
// Anything that consumes a hue normalizes it first (see `convert`).

use std::fmt;

use crate::Result;
use crate::convert::{hsb_to_rgb, rgb_to_hsb};
use crate::distance::color_distance;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color. Channels are always in [0, 255] by construction.
///
/// # Examples
///
/// ```
/// use huegen_color::Rgb;
///
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.to_hex(), "#ff8000");
/// assert_eq!(orange.to_string(), "#ff8000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral grey with all three channels equal to `level`.
    #[inline]
    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// The channels as an `[r, g, b]` array.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether all three channels are equal.
    #[inline]
    #[must_use]
    pub const fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Convert to HSB.
    #[inline]
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        rgb_to_hsb(self.r, self.g, self.b)
    }

    /// Redmean perceptual distance to `other`. See [`color_distance`].
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        color_distance(self, other)
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// A color in hue/saturation/brightness form, each component on [0, 1].
///
/// Construction does not validate: saturation or brightness outside
/// [0, 1] is reported when the color is converted with [`Hsb::to_rgb`].
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsb {
    /// Hue angle as a fraction of the ring. 0.0 = red, 1/3 = green, 2/3 = blue.
    pub hue: f32,

    /// Saturation: 0.0 (grey) to 1.0 (fully saturated).
    pub saturation: f32,

    /// Brightness: 0.0 (black) to 1.0 (full intensity).
    pub brightness: f32,
}

impl Hsb {
    #[inline]
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self { hue, saturation, brightness }
    }

    /// Convert to 8-bit RGB.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorValue`](crate::ColorError::InvalidColorValue)
    /// if saturation is non-zero and saturation or brightness is outside [0, 1].
    #[inline]
    pub fn to_rgb(self) -> Result<Rgb> {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }
}

impl fmt::Debug for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hsb({:.4}, {:.4}, {:.4})",
            self.hue, self.saturation, self.brightness
        )
    }
}

impl From<Rgb> for Hsb {
    fn from(color: Rgb) -> Self {
        color.to_hsb()
    }
}

// ─── Channel Quantization ────────────────────────────────────────────────────

/// Round a channel value on the 0–255 scale to the nearest `u8`.
///
/// Out-of-range values clamp to the nearest bound; NaN maps to 0.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(v: f32) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
