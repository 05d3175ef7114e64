// SPDX-License-Identifier: MIT
//
// Error taxonomy shared by every huegen crate.

use thiserror::Error;

/// Convenience alias used throughout huegen.
pub type Result<T, E = ColorError> = std::result::Result<T, E>;

/// Errors produced by color conversion and palette generation.
///
/// Every variant is a terminal failure of the single call that raised it.
/// Nothing is retried and nothing falls back to a default color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Saturation or brightness outside [0, 1].
    #[error("invalid HSB value: saturation {saturation} and brightness {brightness} must lie in [0, 1]")]
    InvalidColorValue {
        /// Saturation as passed by the caller.
        saturation: f32,
        /// Brightness as passed by the caller.
        brightness: f32,
    },

    /// Gradient endpoint outside [0, 1].
    #[error("invalid gradient range: from {from} and to {to} must lie in [0, 1]")]
    InvalidGradientRange {
        /// Start of the hue interval.
        from: f32,
        /// End of the hue interval.
        to: f32,
    },

    /// Gradient strategy token that names no known strategy.
    #[error("unknown gradient strategy '{token}'")]
    UnknownGradientStrategy {
        /// The unrecognized token.
        token: String,
    },

    /// Split-complementary ranges wider than twice the variation.
    #[error(
        "invalid harmony range: range2 {range2} and range3 {range3} must be smaller than 2 * variation ({variation})"
    )]
    InvalidHarmonyRange {
        /// Width of the second hue band.
        range2: f32,
        /// Width of the third hue band.
        range3: f32,
        /// Variation around the complement.
        variation: f32,
    },

    /// HSB sector index outside 0..=5. Indicates a bug, not bad input.
    #[error("internal conversion error: hue sector {sector} is outside 0..=5")]
    InternalConversionError {
        /// The sector index that was computed.
        sector: i64,
    },
}
