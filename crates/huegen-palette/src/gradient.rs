//! Gradient sampling: `n` colors picked from an interval of the hue ring.
//!
//! Four strategies decide where along `[from, to]` each sample lands. All of
//! them convert at a fixed saturation and brightness.
//!
//! | Strategy        | Token | Hue for sample `i`                                       |
//! |-----------------|-------|----------------------------------------------------------|
//! | Uniform random  | `UR`  | `from + U·span`, fresh draw per sample                   |
//! | Grid            | `G`   | `from + i·span/n`                                        |
//! | Jittered grid   | `JG`  | `from + i·((2U − 1)·0.5)·span/n`                         |
//! | Golden ratio    | `GR`  | `from + (offset + frac(0.618034·i))·span/n`, one offset  |

use std::fmt;
use std::str::FromStr;

use huegen_color::{ColorError, Result, Rgb, hsb_to_rgb};
use rand::Rng;

/// Golden ratio conjugate, `1/φ`.
const GOLDEN_RATIO_CONJUGATE: f32 = 0.618_034;

/// Largest jitter as a fraction of a grid cell.
const MAX_JITTER: f32 = 0.5;

// ---------------------------------------------------------------------------
// GradientStrategy
// ---------------------------------------------------------------------------

/// How sample hues are chosen within the gradient interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GradientStrategy {
    /// Independent uniform draws across the interval.
    UniformRandom,
    /// Evenly spaced cells; no two samples closer than `span / n`.
    Grid,
    /// Grid positions scaled by a random jitter of up to half a cell.
    JitteredGrid,
    /// Low-discrepancy spacing from multiples of the golden ratio conjugate.
    GoldenRatio,
}

impl GradientStrategy {
    /// Short token: `UR`, `G`, `JG` or `GR`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::UniformRandom => "UR",
            Self::Grid => "G",
            Self::JitteredGrid => "JG",
            Self::GoldenRatio => "GR",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UniformRandom => "uniform-random",
            Self::Grid => "grid",
            Self::JitteredGrid => "jittered-grid",
            Self::GoldenRatio => "golden-ratio",
        }
    }

    /// All available strategies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::UniformRandom, Self::Grid, Self::JitteredGrid, Self::GoldenRatio]
    }
}

impl FromStr for GradientStrategy {
    type Err = ColorError;

    /// Parse a token or name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .find(|k| k.token().eq_ignore_ascii_case(&lower) || k.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::UnknownGradientStrategy { token: s.to_owned() })
    }
}

impl fmt::Display for GradientStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// GradientOptions
// ---------------------------------------------------------------------------

/// Saturation and brightness shared by every sample of a gradient.
///
/// Both default to 1.0 (fully saturated, full brightness).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GradientOptions {
    pub saturation: f32,
    pub brightness: f32,
}

impl GradientOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { saturation: 1.0, brightness: 1.0 }
    }

    #[must_use]
    pub const fn with_saturation(self, saturation: f32) -> Self {
        Self { saturation, ..self }
    }

    #[must_use]
    pub const fn with_brightness(self, brightness: f32) -> Self {
        Self { brightness, ..self }
    }
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Sample `n` colors from the hue interval `[from, to]`.
///
/// `from` and `to` may come in either order; they are swapped so that
/// `from <= to`. Output has exactly `n` colors, in sample order.
///
/// # Errors
///
/// - [`ColorError::InvalidGradientRange`] if `from` or `to` is outside [0, 1].
/// - [`ColorError::InvalidColorValue`] if the options' saturation or
///   brightness is outside [0, 1] (and `n > 0`).
pub fn gradient_rgb<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    from: f32,
    to: f32,
    strategy: GradientStrategy,
    options: GradientOptions,
) -> Result<Vec<Rgb>> {
    let (from, to) = ordered_range(from, to)?;
    sample(rng, n, from, to, strategy, options)
}

/// Like [`gradient_rgb`], with the strategy given as a token or name.
///
/// # Errors
///
/// Everything [`gradient_rgb`] reports, plus
/// [`ColorError::UnknownGradientStrategy`] for an unrecognized token.
/// The range is checked first.
pub fn gradient_rgb_named<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    from: f32,
    to: f32,
    token: &str,
    options: GradientOptions,
) -> Result<Vec<Rgb>> {
    let (from, to) = ordered_range(from, to)?;
    let strategy = token.parse()?;
    sample(rng, n, from, to, strategy, options)
}

fn ordered_range(from: f32, to: f32) -> Result<(f32, f32)> {
    let unit = 0.0..=1.0;
    if !unit.contains(&from) || !unit.contains(&to) {
        log::debug!("rejecting gradient range [{from}, {to}]");
        return Err(ColorError::InvalidGradientRange { from, to });
    }
    if from > to {
        log::debug!("swapping gradient range [{from}, {to}]");
        Ok((to, from))
    } else {
        Ok((from, to))
    }
}

fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    from: f32,
    to: f32,
    strategy: GradientStrategy,
    options: GradientOptions,
) -> Result<Vec<Rgb>> {
    log::trace!("gradient: {n} samples over [{from}, {to}] via {}", strategy.name());

    let GradientOptions { saturation, brightness } = options;
    let span = to - from;
    let cell = span / n as f32;
    let convert = |h: f32| hsb_to_rgb(h, saturation, brightness);

    match strategy {
        GradientStrategy::UniformRandom => (0..n)
            .map(|_| convert(rng.random::<f32>().mul_add(span, from)))
            .collect(),
        GradientStrategy::Grid => (0..n)
            .map(|i| convert((i as f32).mul_add(cell, from)))
            .collect(),
        GradientStrategy::JitteredGrid => (0..n)
            .map(|i| {
                let jitter = 2.0f32.mul_add(rng.random::<f32>(), -1.0) * MAX_JITTER;
                convert((i as f32 * jitter).mul_add(cell, from))
            })
            .collect(),
        GradientStrategy::GoldenRatio => {
            let offset: f32 = rng.random();
            (0..n)
                .map(|i| {
                    let step = (GOLDEN_RATIO_CONJUGATE * i as f32) % 1.0;
                    convert((offset + step).mul_add(cell, from))
                })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use huegen_color::rgb_to_hsb;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn hue_diff(a: f32, b: f32) -> f32 {
        let d = (a - b).abs() % 1.0;
        if d > 0.5 { 1.0 - d } else { d }
    }

    fn grid(n: usize, from: f32, to: f32) -> Result<Vec<Rgb>> {
        gradient_rgb(&mut rng(), n, from, to, GradientStrategy::Grid, GradientOptions::default())
    }

    /// Every strategy returns exactly n colors.
    #[test]
    fn cardinality_for_every_strategy() {
        for &strategy in GradientStrategy::all() {
            for n in [0, 1, 5, 17] {
                let colors =
                    gradient_rgb(&mut rng(), n, 0.1, 0.9, strategy, GradientOptions::default())
                        .unwrap();
                assert_eq!(colors.len(), n, "{strategy:?} with n = {n}");
            }
        }
    }

    #[test]
    fn out_of_range_endpoints_rejected() {
        assert_eq!(
            grid(5, -0.1, 0.5),
            Err(ColorError::InvalidGradientRange { from: -0.1, to: 0.5 })
        );
        assert!(grid(5, 0.2, 1.2).is_err());
        assert!(grid(5, f32::NAN, 0.5).is_err());
    }

    #[test]
    fn reversed_range_is_swapped() {
        assert_eq!(grid(5, 0.8, 0.2), grid(5, 0.2, 0.8));
    }

    #[test]
    fn grid_over_full_ring_hits_primaries() {
        let colors = grid(6, 0.0, 1.0).unwrap();
        assert_eq!(
            colors,
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(255, 255, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 255, 255),
                Rgb::new(0, 0, 255),
                Rgb::new(255, 0, 255),
            ]
        );
    }

    #[test]
    fn uniform_random_stays_inside_interval() {
        let colors = gradient_rgb(
            &mut rng(),
            64,
            0.2,
            0.4,
            GradientStrategy::UniformRandom,
            GradientOptions::default(),
        )
        .unwrap();
        for c in colors {
            let hue = rgb_to_hsb(c.r, c.g, c.b).hue;
            assert!((0.19..=0.41).contains(&hue), "{c:?} has hue {hue}");
        }
    }

    #[test]
    fn golden_ratio_is_reproducible_under_a_seed() {
        let a = gradient_rgb(&mut rng(), 12, 0.0, 1.0, GradientStrategy::GoldenRatio, GradientOptions::default());
        let b = gradient_rgb(&mut rng(), 12, 0.0, 1.0, GradientStrategy::GoldenRatio, GradientOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn golden_ratio_places_samples_from_one_offset() {
        let (n, from, to) = (10usize, 0.2f32, 0.6f32);
        let cell = (to - from) / n as f32;
        let mut rng = rng();
        let offset: f32 = rng.clone().random();
        let colors =
            gradient_rgb(&mut rng, n, from, to, GradientStrategy::GoldenRatio, GradientOptions::default())
                .unwrap();
        assert_eq!(colors.len(), n);
        for (i, c) in colors.into_iter().enumerate() {
            let step = (GOLDEN_RATIO_CONJUGATE * i as f32) % 1.0;
            let hue = (offset + step).mul_add(cell, from);
            assert_eq!(c, hsb_to_rgb(hue, 1.0, 1.0).unwrap(), "sample {i}");
            // offset + step < 2, so every sample sits in the first two cells.
            let measured = rgb_to_hsb(c.r, c.g, c.b).hue;
            assert!(
                measured >= from - 0.002 && measured <= 2.0f32.mul_add(cell, from) + 0.002,
                "sample {i} has hue {measured}"
            );
        }
    }

    #[test]
    fn jittered_grid_stays_within_scaled_half_cell() {
        let (n, from, to) = (8usize, 0.05f32, 0.45f32);
        let cell = (to - from) / n as f32;
        for seed in 0..16 {
            let colors = gradient_rgb(
                &mut StdRng::seed_from_u64(seed),
                n,
                from,
                to,
                GradientStrategy::JitteredGrid,
                GradientOptions::default(),
            )
            .unwrap();
            for (i, c) in colors.into_iter().enumerate() {
                let hue = rgb_to_hsb(c.r, c.g, c.b).hue;
                let bound = (MAX_JITTER * i as f32).mul_add(cell, 0.002);
                assert!(
                    hue_diff(hue, from) <= bound,
                    "seed {seed}, sample {i}: hue {hue} farther than {bound} from {from}"
                );
            }
        }
    }

    #[test]
    fn jittered_grid_draws_one_jitter_per_sample() {
        let (n, from, to) = (6usize, 0.3f32, 0.7f32);
        let cell = (to - from) / n as f32;
        let mut rng = rng();
        let mut replay = rng.clone();
        let colors =
            gradient_rgb(&mut rng, n, from, to, GradientStrategy::JitteredGrid, GradientOptions::default())
                .unwrap();
        for (i, c) in colors.into_iter().enumerate() {
            let jitter = 2.0f32.mul_add(replay.random::<f32>(), -1.0) * MAX_JITTER;
            let hue = (i as f32 * jitter).mul_add(cell, from);
            assert_eq!(c, hsb_to_rgb(hue, 1.0, 1.0).unwrap(), "sample {i}");
        }
    }

    #[test]
    fn jittered_grid_first_sample_is_from() {
        // Sample 0 has no jitter: i = 0 zeroes the offset.
        let colors = gradient_rgb(
            &mut rng(),
            4,
            0.5,
            0.9,
            GradientStrategy::JitteredGrid,
            GradientOptions::default(),
        )
        .unwrap();
        assert_eq!(colors[0], hsb_to_rgb(0.5, 1.0, 1.0).unwrap());
    }

    #[test]
    fn saturation_and_brightness_pass_through() {
        let options = GradientOptions::new().with_saturation(0.0).with_brightness(0.5);
        for &strategy in GradientStrategy::all() {
            let colors = gradient_rgb(&mut rng(), 4, 0.0, 1.0, strategy, options).unwrap();
            assert!(colors.iter().all(|&c| c == Rgb::grey(128)), "{strategy:?}: {colors:?}");
        }
    }

    #[test]
    fn invalid_brightness_surfaces() {
        let options = GradientOptions::new().with_brightness(1.5);
        assert!(matches!(
            gradient_rgb(&mut rng(), 3, 0.0, 1.0, GradientStrategy::Grid, options),
            Err(ColorError::InvalidColorValue { .. })
        ));
    }

    // ── Strategy tokens ──────────────────────────────────────────────────

    #[test]
    fn tokens_and_names_parse() {
        for &strategy in GradientStrategy::all() {
            assert_eq!(strategy.token().parse::<GradientStrategy>(), Ok(strategy));
            assert_eq!(strategy.name().parse::<GradientStrategy>(), Ok(strategy));
            assert_eq!(strategy.to_string().to_lowercase().parse::<GradientStrategy>(), Ok(strategy));
        }
        assert_eq!("Golden-Ratio".parse::<GradientStrategy>(), Ok(GradientStrategy::GoldenRatio));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn strategy_and_options_serde() {
        let json = serde_json::to_string(&GradientStrategy::JitteredGrid).unwrap();
        assert_eq!(json, r#""jittered-grid""#);
        let back: GradientStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GradientStrategy::JitteredGrid);

        let options: GradientOptions = serde_json::from_str(r#"{"brightness":0.5}"#).unwrap();
        assert_eq!(options, GradientOptions::new().with_brightness(0.5));
    }

    #[test]
    fn unknown_token_rejected() {
        assert_eq!(
            "XX".parse::<GradientStrategy>(),
            Err(ColorError::UnknownGradientStrategy { token: "XX".into() })
        );
    }

    #[test]
    fn named_entry_point() {
        let by_name = gradient_rgb_named(&mut rng(), 5, 0.0, 0.5, "G", GradientOptions::default());
        assert_eq!(by_name, grid(5, 0.0, 0.5));
        assert!(matches!(
            gradient_rgb_named(&mut rng(), 5, 0.0, 0.5, "zigzag", GradientOptions::default()),
            Err(ColorError::UnknownGradientStrategy { .. })
        ));
        // Range problems win over token problems.
        assert!(matches!(
            gradient_rgb_named(&mut rng(), 5, 2.0, 0.5, "zigzag", GradientOptions::default()),
            Err(ColorError::InvalidGradientRange { .. })
        ));
    }
}
