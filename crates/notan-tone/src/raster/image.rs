//! Row-major RGB image with validated dimensions.

use crate::color::ColorSample;
use crate::error::ToneError;

use super::region::Region;

/// A decoded picture: `width * height` samples in row-major order.
///
/// Construction rejects zero-area images and buffers whose length does not
/// match the declared dimensions, so every `Image` in circulation is
/// well-formed.
///
/// # Example
///
/// ```
/// use notan_tone::{ColorSample, Image};
///
/// let image = Image::filled(3, 2, ColorSample::gray(40)).unwrap();
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.pixels().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<ColorSample>,
}

impl Image {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// [`ToneError::EmptyImage`] if either dimension is zero,
    /// [`ToneError::InvalidParameter`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<ColorSample>) -> Result<Self, ToneError> {
        if width == 0 || height == 0 {
            return Err(ToneError::EmptyImage);
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ToneError::invalid(format!(
                "pixel buffer length {} does not match {}x{}={}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: ColorSample) -> Result<Self, ToneError> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Build an image from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, ToneError> {
        if bytes.len() % 3 != 0 {
            return Err(ToneError::invalid(format!(
                "RGB byte buffer length {} is not a multiple of 3",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| ColorSample::new(c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[ColorSample] {
        &self.pixels
    }

    /// Sample at column `x`, row `y`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<ColorSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Packed `[R, G, B, ...]` bytes, length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for sample in &self.pixels {
            rgb.extend_from_slice(&sample.to_bytes());
        }
        rgb
    }

    /// A new image with the same dimensions and a replaced pixel buffer.
    ///
    /// `f` sees each sample in row-major order.
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: FnMut(&ColorSample) -> ColorSample,
    {
        Image {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }

    /// Copy out the sub-image covered by `region`.
    ///
    /// The result's dimensions always equal the region's.
    ///
    /// # Errors
    ///
    /// [`ToneError::InvalidRegion`] if the region has zero area or extends
    /// past the image edges.
    pub fn crop(&self, region: Region) -> Result<Image, ToneError> {
        if !region.fits_within(self.width, self.height) {
            return Err(region.invalid_for(self.width, self.height));
        }

        let stride = self.width as usize;
        let mut pixels = Vec::with_capacity(region.area());
        for row in region.y..region.y + region.height {
            let start = row as usize * stride + region.x as usize;
            pixels.extend_from_slice(&self.pixels[start..start + region.width as usize]);
        }

        Ok(Image {
            width: region.width,
            height: region.height,
            pixels,
        })
    }
}
