//! ToneQuantizer builder, the primary entry point for tone reduction.

use std::sync::Arc;

use crate::color::{luminance, ColorSample};
use crate::error::ToneError;
use crate::raster::Image;

use super::contrast::{Contrast, ContrastCurve, LinearContrast};
use super::table::ToneTable;
use super::thresholds::Thresholds;

/// Reduces an image to `K` luminance bands.
///
/// # Design
///
/// - Constructor validates the level count, so a built quantizer is always
///   usable
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   reused across images
///
/// # Example
///
/// ```
/// use notan_tone::{ColorSample, Contrast, Image, ToneQuantizer};
///
/// let quantizer = ToneQuantizer::new(3)
///     .unwrap()
///     .contrast(Contrast::new(0.7).unwrap());
///
/// let image = Image::filled(2, 2, ColorSample::gray(20)).unwrap();
/// let notan = quantizer.quantize(&image);
///
/// assert_eq!(notan.width(), 2);
/// assert!(notan.pixels().iter().all(|&p| p == ColorSample::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct ToneQuantizer {
    table: ToneTable,
    contrast: Contrast,
    curve: Arc<dyn ContrastCurve>,
}

impl ToneQuantizer {
    /// Quantizer for the built-in `levels`-tone table, neutral contrast and
    /// the linear curve.
    ///
    /// # Errors
    ///
    /// [`ToneError::InvalidParameter`] if `levels` is out of range.
    pub fn new(levels: usize) -> Result<Self, ToneError> {
        Ok(Self::with_table(ToneTable::for_levels(levels)?))
    }

    /// Quantizer over any validated table. Neutral contrast still yields the
    /// even `i / K` bands, see [`ToneTable::from_colors`].
    pub fn with_table(table: ToneTable) -> Self {
        Self {
            table,
            contrast: Contrast::NEUTRAL,
            curve: Arc::new(LinearContrast::default()),
        }
    }

    #[inline]
    pub fn contrast(mut self, contrast: Contrast) -> Self {
        self.contrast = contrast;
        self
    }

    /// Replace the contrast curve.
    pub fn curve<C: ContrastCurve + 'static>(mut self, curve: C) -> Self {
        self.curve = Arc::new(curve);
        self
    }

    /// Replace the contrast curve with an already boxed one.
    pub fn boxed_curve(mut self, curve: Box<dyn ContrastCurve>) -> Self {
        self.curve = Arc::from(curve);
        self
    }

    #[inline]
    pub fn levels(&self) -> usize {
        self.table.levels()
    }

    #[inline]
    pub fn table(&self) -> &ToneTable {
        &self.table
    }

    /// Band boundaries for the current settings.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(&self.table, self.contrast, self.curve.as_ref())
    }

    /// Map every pixel to its band's representative color.
    ///
    /// Returns a new image with identical dimensions. Zero-area input cannot
    /// reach this point: [`Image`] construction already rejects it.
    pub fn quantize(&self, image: &Image) -> Image {
        let thresholds = self.thresholds();
        image.map_pixels(|&sample| self.table.color(thresholds.level_of(luminance(sample))))
    }

    /// Quantize a raw row-major buffer.
    ///
    /// # Errors
    ///
    /// [`ToneError::EmptyImage`] for a zero dimension,
    /// [`ToneError::InvalidParameter`] when the buffer length is wrong.
    pub fn quantize_pixels(
        &self,
        pixels: &[ColorSample],
        width: u32,
        height: u32,
    ) -> Result<Image, ToneError> {
        let image = Image::new(width, height, pixels.to_vec())?;
        Ok(self.quantize(&image))
    }

    /// Band index of every pixel, row-major.
    pub fn levels_of(&self, image: &Image) -> Vec<u8> {
        let thresholds = self.thresholds();
        image
            .pixels()
            .iter()
            .map(|&sample| thresholds.level_of(luminance(sample)) as u8)
            .collect()
    }

    /// Pixel count per band.
    pub fn histogram(&self, image: &Image) -> Vec<usize> {
        let mut counts = vec![0usize; self.levels()];
        for level in self.levels_of(image) {
            counts[level as usize] += 1;
        }
        counts
    }
}

/// One-shot quantization with the default linear curve.
///
/// # Errors
///
/// [`ToneError::InvalidParameter`] for a bad level count or contrast.
///
/// # Example
///
/// ```
/// use notan_tone::{quantize, ColorSample, Image};
///
/// let image = Image::filled(4, 4, ColorSample::gray(250)).unwrap();
/// let notan = quantize(&image, 2, 0.5).unwrap();
/// assert!(notan.pixels().iter().all(|&p| p == ColorSample::WHITE));
/// ```
pub fn quantize(image: &Image, levels: usize, contrast: f32) -> Result<Image, ToneError> {
    let quantizer = ToneQuantizer::new(levels)?.contrast(Contrast::new(contrast)?);
    Ok(quantizer.quantize(image))
}
