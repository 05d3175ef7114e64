// SPDX-License-Identifier: MIT
//
// huegen — procedural color generation.
//
// This facade ties the workspace crates together:
//
//   huegen-color   → Rgb/Hsb model, HSB ⟷ RGB conversion, redmean distance
//   huegen-palette → random colors, gradients, harmony schemes, mixing
//
// A typical call goes straight from the caller to one generator, which
// samples hues and converts them through the color model:
//
//   ColorGen / fn(&mut impl Rng) → hue selection → hsb_to_rgb → Vec<Rgb>
//
// There is no I/O and no shared state. The only resource is the random
// source, which every generator receives explicitly (or via ColorGen).

pub use huegen_color as color;
pub use huegen_palette as palette;
pub use rand;

pub use huegen_color::{
    ColorError, Hsb, Result, Rgb, color_distance, hsb_to_rgb, normalize_hue, rgb_to_hsb,
};
pub use huegen_palette::{
    ColorGen, GradientOptions, GradientStrategy, HarmonyOptions, analogous, complementary,
    gradient_rgb, gradient_rgb_named, random_offset_rgb, random_rgb, split_complementary,
    standard_harmony, triad, triad_mixing,
};
