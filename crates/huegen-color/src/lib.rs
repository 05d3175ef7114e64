// SPDX-License-Identifier: MIT
//
// huegen-color — the color model underneath huegen.
//
// Two value types and the math between them: `Rgb` (8-bit additive display
// color) and `Hsb` (hue/saturation/brightness on [0, 1], hue circular).
// Conversion follows the classic six-sector hexcone; distance is the
// redmean weighted-Euclidean approximation. Everything here is pure and
// deterministic. Randomness lives one crate up, in huegen-palette.
//
// Single-character variable names (r, g, b, p, q, t, f) are the standard
// convention in color conversion code.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod color;
pub mod convert;
pub mod distance;
pub mod error;

pub use color::{Hsb, Rgb};
pub use convert::{hsb_to_rgb, normalize_hue, rgb_to_hsb};
pub use distance::color_distance;
pub use error::{ColorError, Result};
