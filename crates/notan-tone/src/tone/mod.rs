//! Luminance tone reduction.
//!
//! Every pixel's [`luminance`](crate::color::luminance) is sorted into one of
//! `K` bands and replaced by that band's representative color:
//!
//! ```text
//! ColorSample ──> luminance ──> band (Thresholds) ──> ToneTable color
//!                                  ^
//!                       Contrast + ContrastCurve
//! ```
//!
//! # Bands
//!
//! At neutral contrast the bands have equal width: boundary `i` sits at
//! `i / K`. A [`ContrastCurve`] moves the boundaries toward the middle as
//! contrast departs from 0.5, so mid-tones fall into darker or lighter
//! bands. Whatever the curve does, each boundary is held between the
//! luminances of the two representative tones it separates. That keeps the
//! mapping monotone and makes re-quantization with the same settings a
//! no-op.

mod contrast;
mod quantizer;
mod table;
mod thresholds;

pub use contrast::{
    Contrast, ContrastCurve, CurveKind, LinearContrast, SigmoidContrast, DEFAULT_GAIN,
};
pub use quantizer::{quantize, ToneQuantizer};
pub use table::{ToneTable, MAX_LEVELS, MIN_LEVELS};
pub use thresholds::Thresholds;
