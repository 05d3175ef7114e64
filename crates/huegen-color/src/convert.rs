// SPDX-License-Identifier: MIT
//
// HSB ⟷ RGB conversion.
//
// The hue ring is split into six sectors of width 1/6. Within a sector one
// channel sits at full brightness, one at the saturation floor `p`, and the
// third ramps linearly (`q` falling, `t` rising) across the sector:
//
//   sector:   0      1      2      3      4      5
//   R        bri    q      p      p      t      bri
//   G        t      bri    bri    q      p      p
//   B        p      p      t      bri    bri    q
//
// The reverse direction recovers the sector from whichever channel is the
// maximum.

use crate::color::{Hsb, Rgb, quantize};
use crate::{ColorError, Result};

/// Normalize a hue into [0, 1) via `hue - floor(hue)`.
///
/// Tiny negative inputs can round up to exactly 1.0 in `f32`; those map to
/// 0.0, the same angle.
#[inline]
#[must_use]
pub fn normalize_hue(hue: f32) -> f32 {
    let h = hue - hue.floor();
    if h >= 1.0 { 0.0 } else { h }
}

/// Convert an HSB triple to 8-bit RGB.
///
/// Zero saturation short-circuits to a grey of the given brightness,
/// whatever the hue. Otherwise saturation and brightness must both lie in
/// [0, 1]. Hue is normalized onto the ring first, so `1.5` and `0.5` give
/// the same color.
///
/// ```
/// use huegen_color::{Rgb, convert::hsb_to_rgb};
///
/// assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Ok(Rgb::new(255, 0, 0)));
/// assert_eq!(hsb_to_rgb(1.5, 1.0, 1.0), hsb_to_rgb(0.5, 1.0, 1.0));
/// ```
///
/// # Errors
///
/// - [`ColorError::InvalidColorValue`] if saturation or brightness is
///   outside [0, 1].
/// - [`ColorError::InternalConversionError`] if the sector index falls
///   outside 0..=5, which normalization rules out.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn hsb_to_rgb(hue: f32, sat: f32, bri: f32) -> Result<Rgb> {
    // Exact zero only: any positive saturation goes through the sectors.
    if sat == 0.0 {
        return Ok(Rgb::grey(quantize(bri * 255.0)));
    }
    if !(0.0..=1.0).contains(&sat) || !(0.0..=1.0).contains(&bri) {
        log::debug!("rejecting HSB value: saturation={sat} brightness={bri}");
        return Err(ColorError::InvalidColorValue { saturation: sat, brightness: bri });
    }

    let scaled = 6.0 * normalize_hue(hue);
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = bri * (1.0 - sat);
    let q = bri * sat.mul_add(-f, 1.0);
    let t = bri * sat.mul_add(-(1.0 - f), 1.0);

    let (r, g, b) = match sector as i64 {
        0 => (bri, t, p),
        1 => (q, bri, p),
        2 => (p, bri, t),
        3 => (p, q, bri),
        4 => (t, p, bri),
        5 => (bri, p, q),
        other => return Err(ColorError::InternalConversionError { sector: other }),
    };

    Ok(Rgb::new(
        quantize(r * 255.0),
        quantize(g * 255.0),
        quantize(b * 255.0),
    ))
}

/// Convert 8-bit RGB channels to HSB.
///
/// Greys (including black) come back with hue and saturation both 0.
#[must_use]
pub fn rgb_to_hsb(red: u8, green: u8, blue: u8) -> Hsb {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let (r, g, b) = (f32::from(red), f32::from(green), f32::from(blue));
    let (max_f, min_f) = (f32::from(max), f32::from(min));

    let brightness = max_f / 255.0;
    let saturation = if max == 0 { 0.0 } else { (max_f - min_f) / max_f };

    if max == min {
        return Hsb::new(0.0, saturation, brightness);
    }

    let delta = (max_f - min_f) * 6.0;
    let hue = if red == max {
        (g - b) / delta
    } else if green == max {
        1.0 / 3.0 + (b - r) / delta
    } else {
        2.0 / 3.0 + (r - g) / delta
    };
    let hue = if hue < 0.0 { hue + 1.0 } else { hue };

    Hsb::new(hue, saturation, brightness)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
