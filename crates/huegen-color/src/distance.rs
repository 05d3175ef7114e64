// SPDX-License-Identifier: MIT
//
// Redmean color distance: a cheap weighted-Euclidean approximation of
// perceptual difference between two sRGB colors. The red and blue weights
// slide with the mean red level, green is weighted at a constant 4.

use crate::color::Rgb;

/// Perceptual distance between two RGB colors (redmean approximation).
///
/// ```text
/// rmean = (r1 + r2) / 2
/// d     = sqrt((512 + rmean)/256 · dr² + 4 · dg² + (767 − rmean)/256 · db²)
/// ```
///
/// Symmetric, zero exactly when the colors are identical, and unbounded
/// above (black to white is roughly 765).
#[must_use]
pub fn color_distance(c1: Rgb, c2: Rgb) -> f32 {
    let rmean = (f32::from(c1.r) + f32::from(c2.r)) / 2.0;
    let dr = f32::from(c1.r) - f32::from(c2.r);
    let dg = f32::from(c1.g) - f32::from(c2.g);
    let db = f32::from(c1.b) - f32::from(c2.b);

    let red = (512.0 + rmean) * dr * dr / 256.0;
    let green = 4.0 * dg * dg;
    let blue = (767.0 - rmean) * db * db / 256.0;
    (red + green + blue).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgb; 6] = [
        Rgb::BLACK,
        Rgb::WHITE,
        Rgb::new(255, 0, 0),
        Rgb::new(12, 200, 99),
        Rgb::new(128, 128, 128),
        Rgb::new(3, 7, 250),
    ];

    #[test]
    fn identical_colors_have_zero_distance() {
        for c in SAMPLES {
            assert_eq!(color_distance(c, c), 0.0, "{c:?}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(color_distance(a, b), color_distance(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn distinct_colors_are_positive() {
        assert!(color_distance(Rgb::BLACK, Rgb::new(0, 0, 1)) > 0.0);
    }

    #[test]
    fn black_to_white_known_value() {
        // rmean = 127.5: ((639.5 + 639.5)/256 + 4) · 255²
        let expected = 255.0 * (1279.0_f32 / 256.0 + 4.0).sqrt();
        let d = color_distance(Rgb::BLACK, Rgb::WHITE);
        assert!((d - expected).abs() < 1e-2, "d = {d}, expected {expected}");
        assert!((764.0..766.0).contains(&d));
    }

    #[test]
    fn green_weighs_more_than_red_at_low_rmean() {
        let red_step = color_distance(Rgb::BLACK, Rgb::new(10, 0, 0));
        let green_step = color_distance(Rgb::BLACK, Rgb::new(0, 10, 0));
        assert!(green_step > red_step);
    }

    #[test]
    fn method_form_matches_free_function() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.distance(b), color_distance(a, b));
    }
}
