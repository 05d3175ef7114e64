//! `ColorGen` — a generator object that owns its random source.
//!
//! The free functions in [`random`](crate::random), [`gradient`](crate::gradient),
//! [`harmony`](crate::harmony) and [`mix`](crate::mix) take the RNG as an
//! argument. `ColorGen` bundles one so callers don't thread it through by hand:
//!
//! - [`ColorGen::new`] uses the thread-local RNG (`rand::rng()`). Each thread
//!   has its own generator state, so concurrent callers never share it.
//! - [`ColorGen::seeded`] uses a seeded [`StdRng`] for reproducible output.
//! - [`ColorGen::with_rng`] accepts any [`Rng`].

use huegen_color::{Result, Rgb};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::gradient::{self, GradientOptions, GradientStrategy};
use crate::harmony::{self, HarmonyOptions};
use crate::mix;
use crate::random;

/// Color generator holding an injected random source.
///
/// ```
/// use huegen_palette::{ColorGen, GradientOptions, GradientStrategy};
///
/// let mut a = ColorGen::seeded(7);
/// let mut b = ColorGen::seeded(7);
/// let opts = GradientOptions::default();
/// assert_eq!(
///     a.gradient(5, 0.0, 1.0, GradientStrategy::GoldenRatio, opts).unwrap(),
///     b.gradient(5, 0.0, 1.0, GradientStrategy::GoldenRatio, opts).unwrap(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ColorGen<R = ThreadRng> {
    rng: R,
}

impl ColorGen<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ColorGen<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorGen<StdRng> {
    /// Deterministic generator: the same seed yields the same colors.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> ColorGen<R> {
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Borrow the underlying RNG, e.g. to call the free functions directly.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    #[must_use]
    pub fn into_rng(self) -> R {
        self.rng
    }

    // ─── Random colors ───────────────────────────────────────────────────

    /// See [`random::random_rgb`].
    pub fn random_rgb(&mut self) -> Rgb {
        random::random_rgb(&mut self.rng)
    }

    /// See [`random::random_offset_rgb`].
    pub fn random_offset_rgb(&mut self, base: Rgb, offset: f32) -> Rgb {
        random::random_offset_rgb(&mut self.rng, base, offset)
    }

    // ─── Gradients ───────────────────────────────────────────────────────

    /// See [`gradient::gradient_rgb`].
    ///
    /// # Errors
    ///
    /// As [`gradient::gradient_rgb`].
    pub fn gradient(
        &mut self,
        n: usize,
        from: f32,
        to: f32,
        strategy: GradientStrategy,
        options: GradientOptions,
    ) -> Result<Vec<Rgb>> {
        gradient::gradient_rgb(&mut self.rng, n, from, to, strategy, options)
    }

    /// See [`gradient::gradient_rgb_named`].
    ///
    /// # Errors
    ///
    /// As [`gradient::gradient_rgb_named`].
    pub fn gradient_named(
        &mut self,
        n: usize,
        from: f32,
        to: f32,
        token: &str,
        options: GradientOptions,
    ) -> Result<Vec<Rgb>> {
        gradient::gradient_rgb_named(&mut self.rng, n, from, to, token, options)
    }

    // ─── Harmony schemes ─────────────────────────────────────────────────

    /// See [`harmony::standard_harmony`].
    ///
    /// # Errors
    ///
    /// As [`harmony::standard_harmony`].
    pub fn standard_harmony(
        &mut self,
        n: usize,
        range1: f32,
        range2: f32,
        range3: f32,
        options: HarmonyOptions,
    ) -> Result<Vec<Rgb>> {
        harmony::standard_harmony(&mut self.rng, n, range1, range2, range3, options)
    }

    /// See [`harmony::analogous`].
    ///
    /// # Errors
    ///
    /// As [`harmony::analogous`].
    pub fn analogous(&mut self, n: usize, range: f32, options: HarmonyOptions) -> Result<Vec<Rgb>> {
        harmony::analogous(&mut self.rng, n, range, options)
    }

    /// See [`harmony::complementary`].
    ///
    /// # Errors
    ///
    /// As [`harmony::complementary`].
    pub fn complementary(
        &mut self,
        n: usize,
        range1: f32,
        range2: f32,
        options: HarmonyOptions,
    ) -> Result<Vec<Rgb>> {
        harmony::complementary(&mut self.rng, n, range1, range2, options)
    }

    /// See [`harmony::split_complementary`].
    ///
    /// # Errors
    ///
    /// As [`harmony::split_complementary`].
    pub fn split_complementary(
        &mut self,
        n: usize,
        range1: f32,
        range2: f32,
        range3: f32,
        variation: f32,
        options: HarmonyOptions,
    ) -> Result<Vec<Rgb>> {
        harmony::split_complementary(&mut self.rng, n, range1, range2, range3, variation, options)
    }

    /// See [`harmony::triad`].
    ///
    /// # Errors
    ///
    /// As [`harmony::triad`].
    pub fn triad(
        &mut self,
        n: usize,
        range1: f32,
        range2: f32,
        range3: f32,
        options: HarmonyOptions,
    ) -> Result<Vec<Rgb>> {
        harmony::triad(&mut self.rng, n, range1, range2, range3, options)
    }

    // ─── Mixing ──────────────────────────────────────────────────────────

    /// See [`mix::triad_mixing`].
    pub fn triad_mixing(&mut self, c1: Rgb, c2: Rgb, c3: Rgb, grey_control: f32) -> Rgb {
        mix::triad_mixing(&mut self.rng, c1, c2, c3, grey_control)
    }
}
