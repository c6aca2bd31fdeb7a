//! Perceptual luminance (Rec. 601 weights).

use super::sample::ColorSample;

const WEIGHT_R: f32 = 0.299;
const WEIGHT_G: f32 = 0.587;
const WEIGHT_B: f32 = 0.114;

/// Scalar brightness of a sample in `0.0..=1.0`.
///
/// `(0.299 R + 0.587 G + 0.114 B) / 255`, clamped so that float rounding on
/// pure white never leaves the unit range.
#[inline]
pub fn luminance(sample: ColorSample) -> f32 {
    let weighted =
        WEIGHT_R * sample.r as f32 + WEIGHT_G * sample.g as f32 + WEIGHT_B * sample.b as f32;
    (weighted / 255.0).clamp(0.0, 1.0)
}
