//! Random color generators.
//!
//! Both draw from an injected [`Rng`], so a seeded generator gives the same
//! colors every run. Use [`crate::ColorGen`] for a ready-made thread-local
//! default.

use huegen_color::Rgb;
use huegen_color::color::quantize;
use rand::Rng;

/// A color with three independent uniform channels in [0, 255].
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// A random brightness offset of `base`.
///
/// The channel mean is perturbed uniformly within `[mean - offset, mean + offset]`
/// and the ratio `new_mean / mean` scales the *red* channel only; that one
/// value fills all three output channels, so the result is always grey.
/// Channels are floored and clamped to [0, 255].
///
/// An all-black `base` has no mean to scale: the scaled channel is NaN and
/// the result is black.
pub fn random_offset_rgb<R: Rng + ?Sized>(rng: &mut R, base: Rgb, offset: f32) -> Rgb {
    let [r, g, b] = base.channels().map(f32::from);
    let mean = (r + g + b) / 3.0;
    let new_mean = (2.0 * rng.random::<f32>()).mul_add(offset, mean) - offset;
    let ratio = new_mean / mean;
    Rgb::grey(quantize((r * ratio).floor()))
}
