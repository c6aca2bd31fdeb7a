//! Color samples and luminance extraction.
//!
//! Quantization only looks at brightness: every [`ColorSample`] is reduced to
//! a scalar [`luminance`] in `0.0..=1.0` before it is assigned a tone level.
//!
//! # Example
//!
//! ```
//! use notan_tone::{luminance, ColorSample};
//!
//! let gray = ColorSample::gray(128);
//! let lum = luminance(gray);
//! assert!((lum - 128.0 / 255.0).abs() < 1e-5);
//! ```

mod luminance;
mod sample;

pub use luminance::luminance;
pub use sample::{ColorSample, ParseColorError};
