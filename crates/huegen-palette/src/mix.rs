//! Three-way color mixing with a greyness control.
//!
//! One of the three inputs, chosen at random, has its weight damped by
//! `grey_control`. Low values let the other two dominate; 1.0 is plain
//! unconstrained mixing.

use huegen_color::Rgb;
use huegen_color::color::quantize;
use rand::Rng;

/// Mix three colors with random convex weights.
///
/// Draws the damped index `k ∈ {0, 1, 2}`, then one weight per input in
/// order: `U(0, 1) · grey_control` for input `k`, `U(0, 1)` for the others.
/// Weights are normalized to sum to 1 and each output channel is the
/// rounded weighted sum, so it always lies between the smallest and largest
/// input value for that channel.
pub fn triad_mixing<R: Rng + ?Sized>(
    rng: &mut R,
    c1: Rgb,
    c2: Rgb,
    c3: Rgb,
    grey_control: f32,
) -> Rgb {
    let [w1, w2, w3] = mix_weights(rng, grey_control);
    let channel = |a: u8, b: u8, c: u8| {
        quantize(w1.mul_add(f32::from(a), w2.mul_add(f32::from(b), w3 * f32::from(c))))
    };
    Rgb::new(
        channel(c1.r, c2.r, c3.r),
        channel(c1.g, c2.g, c3.g),
        channel(c1.b, c2.b, c3.b),
    )
}

/// Normalized mixing weights, one per input.
fn mix_weights<R: Rng + ?Sized>(rng: &mut R, grey_control: f32) -> [f32; 3] {
    let damped = rng.random_range(0..3usize);
    let mut weights = [0.0f32; 3];
    for (i, w) in weights.iter_mut().enumerate() {
        let draw: f32 = rng.random();
        *w = if i == damped { draw * grey_control } else { draw };
    }
    let sum: f32 = weights.iter().sum();
    weights.map(|w| w / sum)
}
