//! # huegen-palette — procedural palette generation
//!
//! Turns a handful of numbers into colors: random picks, hue-ring gradients,
//! classical harmony schemes, and three-way mixing. Everything samples in
//! HSB and converts through [`huegen_color`].
//!
//! # Architecture
//!
//! ```text
//! caller ──► ColorGen (owns an Rng)   or   free fn(&mut impl Rng, ...)
//!                 │
//!     ┌───────────┼──────────────┬──────────────┐
//!     ▼           ▼              ▼              ▼
//! random.rs   gradient.rs    harmony.rs      mix.rs
//!  (RGB)      (hue interval)  (hue bands)    (RGB weights)
//!                 │              │
//!                 └──────┬───────┘
//!                        ▼
//!          huegen_color::hsb_to_rgb (HSB → RGB)
//! ```
//!
//! # Randomness
//!
//! No function reaches for a global RNG. Each takes `&mut R where R: Rng`,
//! so tests pin a seed and get identical palettes every run. [`ColorGen::new`]
//! is the convenience default: a thread-local RNG, safe to use from any
//! number of threads at once.

// Loop indices and sample counts become f32 hue positions.
#![allow(clippy::cast_precision_loss)]
// Harmony entry points mirror the band parameters one-to-one.
#![allow(clippy::too_many_arguments)]
#![allow(clippy::similar_names)]

pub mod generator;
pub mod gradient;
pub mod harmony;
pub mod mix;
pub mod random;

pub use generator::ColorGen;
pub use gradient::{GradientOptions, GradientStrategy, gradient_rgb, gradient_rgb_named};
pub use harmony::{
    HarmonyOptions, analogous, complementary, split_complementary, standard_harmony, triad,
};
pub use mix::triad_mixing;
pub use random::{random_offset_rgb, random_rgb};
