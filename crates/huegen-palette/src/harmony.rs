//! Harmony scheme generation — hue bands placed around a reference angle.
//!
//! Every scheme is a parameterization of [`standard_harmony`]: up to three
//! hue bands of widths `range1`, `range2`, `range3`. A sample first picks a
//! band with probability proportional to its width, then a position within
//! it. The first band is centered on the reference hue; the second and third
//! are displaced by `offset1` and `offset2`.
//!
//! | Scheme              | range1 | range2 | range3 | offset1        | offset2        |
//! |---------------------|--------|--------|--------|----------------|----------------|
//! | analogous           | range  | 0      | 0      | caller         | caller         |
//! | complementary       | r1     | r2     | 0      | 0.5            | caller         |
//! | split-complementary | r1     | r2     | r3     | 180 − variation | 180 + variation |
//! | triad               | r1     | r2     | r3     | 0.33333        | 0.66667        |
//!
//! Split-complementary offsets are degree-like magnitudes while the others
//! are ring fractions. Both are kept as they are: the hue wrap reduces any
//! offset modulo 1.

use huegen_color::{ColorError, Result, Rgb, hsb_to_rgb, normalize_hue};
use rand::Rng;

const COMPLEMENT_OFFSET: f32 = 0.5;
const SPLIT_COMPLEMENT_CENTER: f32 = 180.0;
const TRIAD_OFFSETS: (f32, f32) = (0.333_33, 0.666_67);

// ---------------------------------------------------------------------------
// HarmonyOptions
// ---------------------------------------------------------------------------

/// Optional parameters shared by every harmony scheme.
///
/// | Field        | Default                       |
/// |--------------|-------------------------------|
/// | `reference`  | one random draw per call      |
/// | `saturation` | 1.0                           |
/// | `brightness` | 1.0                           |
/// | `offset1`    | 0.0                           |
/// | `offset2`    | 0.0                           |
///
/// Schemes with fixed offsets (complementary's `offset1`, split-complementary,
/// triad) ignore the corresponding fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarmonyOptions {
    /// Reference hue on [0, 1). `None` draws one at random per call.
    pub reference: Option<f32>,
    pub saturation: f32,
    pub brightness: f32,
    /// Displacement of the second band.
    pub offset1: f32,
    /// Displacement of the third band.
    pub offset2: f32,
}

impl HarmonyOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reference: None,
            saturation: 1.0,
            brightness: 1.0,
            offset1: 0.0,
            offset2: 0.0,
        }
    }

    #[must_use]
    pub const fn with_reference(self, reference: f32) -> Self {
        Self { reference: Some(reference), ..self }
    }

    #[must_use]
    pub const fn with_saturation(self, saturation: f32) -> Self {
        Self { saturation, ..self }
    }

    #[must_use]
    pub const fn with_brightness(self, brightness: f32) -> Self {
        Self { brightness, ..self }
    }

    #[must_use]
    pub const fn with_offsets(self, offset1: f32, offset2: f32) -> Self {
        Self { offset1, offset2, ..self }
    }
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Core primitive
// ---------------------------------------------------------------------------

/// Generate `n` colors from three hue bands around a reference angle.
///
/// For each sample, `a = U(0, 1) · (range1 + range2 + range3)`:
///
/// - `a < range1`: shifted by `−range1 / 2`, centering band one on the reference;
/// - `a < range1 + range2`: shifted by `offset1 − range2`;
/// - otherwise: shifted by `offset2 − range3`.
///
/// The hue is `a + reference`, wrapped onto [0, 1).
///
/// # Errors
///
/// [`ColorError::InvalidColorValue`] if the options' saturation or brightness
/// is outside [0, 1] (and `n > 0`).
pub fn standard_harmony<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range1: f32,
    range2: f32,
    range3: f32,
    options: HarmonyOptions,
) -> Result<Vec<Rgb>> {
    let reference = options.reference.unwrap_or_else(|| rng.random());
    let total = range1 + range2 + range3;
    log::trace!(
        "harmony: {n} samples, ranges ({range1}, {range2}, {range3}), reference {reference}"
    );

    (0..n)
        .map(|_| {
            let a = rng.random::<f32>() * total;
            let angle = if a < range1 {
                a - range1 / 2.0
            } else if a < range1 + range2 {
                a + options.offset1 - range2
            } else {
                a + options.offset2 - range3
            };
            // Adding whole turns until non-negative, then reducing mod 1,
            // is exactly `h - floor(h)`.
            let hue = normalize_hue(angle + reference);
            hsb_to_rgb(hue, options.saturation, options.brightness)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Named schemes
// ---------------------------------------------------------------------------

/// Analogous scheme: a single band of width `range` centered on the reference.
///
/// # Errors
///
/// As [`standard_harmony`].
pub fn analogous<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: f32,
    options: HarmonyOptions,
) -> Result<Vec<Rgb>> {
    standard_harmony(rng, n, range, 0.0, 0.0, options)
}

/// Complementary scheme: a band at the reference and one across the ring.
///
/// `offset1` is fixed at 0.5; `offset2` comes from the options.
///
/// # Errors
///
/// As [`standard_harmony`].
pub fn complementary<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range1: f32,
    range2: f32,
    options: HarmonyOptions,
) -> Result<Vec<Rgb>> {
    let options = HarmonyOptions { offset1: COMPLEMENT_OFFSET, ..options };
    standard_harmony(rng, n, range1, range2, 0.0, options)
}

/// Split-complementary scheme: two bands either side of the complement.
///
/// Offsets are `180 − variation` and `180 + variation`.
///
/// # Errors
///
/// - [`ColorError::InvalidHarmonyRange`] if `range2 >= 2 · variation` or
///   `range3 >= 2 · variation`.
/// - As [`standard_harmony`] otherwise.
pub fn split_complementary<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range1: f32,
    range2: f32,
    range3: f32,
    variation: f32,
    options: HarmonyOptions,
) -> Result<Vec<Rgb>> {
    if range2 >= 2.0 * variation || range3 >= 2.0 * variation {
        log::debug!(
            "rejecting split-complementary ranges ({range2}, {range3}) for variation {variation}"
        );
        return Err(ColorError::InvalidHarmonyRange { range2, range3, variation });
    }
    let options = options.with_offsets(
        SPLIT_COMPLEMENT_CENTER - variation,
        SPLIT_COMPLEMENT_CENTER + variation,
    );
    standard_harmony(rng, n, range1, range2, range3, options)
}

/// Triad scheme: three bands a third of the ring apart.
///
/// # Errors
///
/// As [`standard_harmony`].
pub fn triad<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range1: f32,
    range2: f32,
    range3: f32,
    options: HarmonyOptions,
) -> Result<Vec<Rgb>> {
    let (offset1, offset2) = TRIAD_OFFSETS;
    standard_harmony(rng, n, range1, range2, range3, options.with_offsets(offset1, offset2))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
