//! notan-tone: tone reduction and composition grids for Notan studies
//!
//! A Notan study reduces a photograph to a handful of flat values (black
//! and white, or a few grays) so that its light/dark structure becomes
//! obvious. This crate holds the algorithmic core: the luminance-to-tone
//! quantizer, the grid overlay geometry and the small state machine that
//! decides which image is current. Decoding, encoding and any user
//! interface live with the caller.
//!
//! # Quick Start
//!
//! ```
//! use notan_tone::{ColorSample, Contrast, Image, ToneQuantizer};
//!
//! let pixels = vec![ColorSample::gray(30), ColorSample::gray(140), ColorSample::gray(230)];
//! let image = Image::new(3, 1, pixels).unwrap();
//!
//! let notan = ToneQuantizer::new(3)
//!     .unwrap()
//!     .contrast(Contrast::NEUTRAL)
//!     .quantize(&image);
//!
//! assert_eq!(
//!     notan.pixels(),
//!     &[ColorSample::BLACK, ColorSample::gray(128), ColorSample::WHITE]
//! );
//! ```
//!
//! # Grid Overlay
//!
//! ```
//! use notan_tone::{grid_lines, DisplayGeometry, GridSpec};
//!
//! // A 1200x800 photo shown 300 points wide
//! let geometry = DisplayGeometry::fit_width(1200, 800, 300.0).unwrap();
//! let lines = grid_lines(GridSpec::new(3, 3).unwrap(), geometry);
//!
//! assert_eq!(lines.vertical, vec![100.0, 200.0, 300.0]);
//! assert_eq!(lines.horizontal.last(), Some(&200.0));
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | [`ColorSample`], [`luminance`] |
//! | [`raster`] | [`Image`], [`Region`] |
//! | [`tone`] | [`ToneQuantizer`], [`ToneTable`], [`Thresholds`], contrast curves |
//! | [`geometry`] | [`GridSpec`], [`DisplayGeometry`], [`grid_lines`] |
//! | [`pipeline`] | [`PipelineState`], [`ImageSink`] |
//!
//! The crate does no logging and no I/O; every failure is returned as a
//! [`ToneError`].

pub mod color;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod raster;
pub mod tone;


pub use color::{luminance, ColorSample, ParseColorError};
pub use error::ToneError;
pub use geometry::{grid_lines, DisplayGeometry, GridLines, GridSpec, MAX_GRID_DIVISIONS};
pub use pipeline::{ImageSink, PipelineState, Stage};
pub use raster::{Image, Region};
pub use tone::{
    quantize, Contrast, ContrastCurve, CurveKind, LinearContrast, SigmoidContrast, Thresholds,
    ToneQuantizer, ToneTable, DEFAULT_GAIN, MAX_LEVELS, MIN_LEVELS,
};
