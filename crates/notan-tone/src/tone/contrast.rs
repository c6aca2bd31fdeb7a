//! Contrast parameter and the curves that warp tone thresholds.
//!
//! A contrast curve moves the neutral, evenly spaced thresholds toward the
//! middle of the luminance range. Pixels near mid-gray then land in the
//! outer bands, which reads as a steeper tone transition. Both built-in
//! curves are symmetric: moving the slider away from 0.5 in either
//! direction strengthens the effect.

use std::fmt;
use std::str::FromStr;

use crate::error::ToneError;

/// Default strength multiplier for the built-in curves.
pub const DEFAULT_GAIN: f32 = 3.0;

/// Contrast slider value in `0.0..=1.0`; `0.5` leaves thresholds untouched.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Contrast(f32);

impl Contrast {
    pub const NEUTRAL: Contrast = Contrast(0.5);

    /// # Errors
    ///
    /// [`ToneError::InvalidParameter`] for values outside `0.0..=1.0` or NaN.
    pub fn new(value: f32) -> Result<Self, ToneError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ToneError::invalid(format!(
                "contrast must be within 0.0..=1.0, got {value}"
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Distance from neutral, rescaled to `0.0..=1.0`.
    #[inline]
    pub fn strength(self) -> f32 {
        ((self.0 - 0.5).abs() * 2.0).min(1.0)
    }

    #[inline]
    pub fn is_neutral(self) -> bool {
        self.0 == 0.5
    }
}

impl Default for Contrast {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f32> for Contrast {
    type Error = ToneError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Strategy for warping a neutral threshold under a contrast setting.
///
/// Implementations must be strictly increasing in `threshold` over
/// `(0, 1)` and must return `threshold` unchanged for
/// [`Contrast::NEUTRAL`]. The quantizer additionally holds every warped
/// threshold between the luminances of its neighbouring representative
/// tones, so a curve cannot reorder bands.
pub trait ContrastCurve: fmt::Debug + Send + Sync {
    fn warp(&self, threshold: f32, contrast: Contrast) -> f32;
}

/// Linear contrast around mid-gray.
///
/// In luminance terms this is `0.5 + (lum - 0.5) * scale` with
/// `scale = 1 + gain * strength`; applied to thresholds it divides the
/// distance from 0.5 by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearContrast {
    pub gain: f32,
}

impl Default for LinearContrast {
    fn default() -> Self {
        Self { gain: DEFAULT_GAIN }
    }
}

impl ContrastCurve for LinearContrast {
    fn warp(&self, threshold: f32, contrast: Contrast) -> f32 {
        if contrast.is_neutral() {
            return threshold;
        }
        let scale = 1.0 + self.gain.max(0.0) * contrast.strength();
        0.5 + (threshold - 0.5) / scale
    }
}

/// S-curve contrast, `x^a / (x^a + (1 - x)^a)` with `a = 1 + gain * strength`.
///
/// The inverse of that curve has the same form with exponent `1 / a`, which
/// is what gets applied to thresholds. Unlike [`LinearContrast`] it keeps
/// the ends of the range fixed and compresses mostly around the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidContrast {
    pub gain: f32,
}

impl Default for SigmoidContrast {
    fn default() -> Self {
        Self { gain: DEFAULT_GAIN }
    }
}

impl ContrastCurve for SigmoidContrast {
    fn warp(&self, threshold: f32, contrast: Contrast) -> f32 {
        if contrast.is_neutral() || threshold <= 0.0 || threshold >= 1.0 {
            return threshold;
        }
        let exponent = 1.0 / (1.0 + self.gain.max(0.0) * contrast.strength());
        let lo = threshold.powf(exponent);
        let hi = (1.0 - threshold).powf(exponent);
        lo / (lo + hi)
    }
}

/// Named selection of a built-in curve, for configuration files and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveKind {
    #[default]
    Linear,
    Sigmoid,
}

impl CurveKind {
    pub fn build(self, gain: f32) -> Box<dyn ContrastCurve> {
        match self {
            CurveKind::Linear => Box::new(LinearContrast { gain }),
            CurveKind::Sigmoid => Box::new(SigmoidContrast { gain }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = ToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(CurveKind::Linear),
            "sigmoid" | "s-curve" => Ok(CurveKind::Sigmoid),
            other => Err(ToneError::invalid(format!(
                "unknown contrast curve {other:?} (expected linear or sigmoid)"
            ))),
        }
    }
}
