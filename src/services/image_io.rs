//! Decoding, encoding and resampling between files and [`Image`].
//!
//! Everything here is blocking; async callers go through
//! [`Session`](super::Session), which runs these on the blocking pool.

use crate::error::AppError;
use crate::models::OutputFormat;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use notan_tone::{
    grid_lines, ColorSample, DisplayGeometry, GridSpec, Image, Region, ToneError,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decode any supported image file to RGB.
pub fn decode(path: &Path) -> Result<Image, AppError> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let image = from_dynamic(decoded)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

/// Decode an in-memory image file to RGB.
pub fn decode_bytes(bytes: &[u8]) -> Result<Image, AppError> {
    from_dynamic(image::load_from_memory(bytes)?)
}

fn from_dynamic(decoded: DynamicImage) -> Result<Image, AppError> {
    let rgb = decoded.to_rgb8();
    Ok(Image::from_rgb_bytes(rgb.width(), rgb.height(), rgb.as_raw())?)
}

/// Encode `image` to `path`, replacing any existing file.
pub fn encode(
    image: &Image,
    format: OutputFormat,
    quality: u8,
    path: &Path,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::Encode(format!("{}: {e}", path.display())))?;
    encode_to_file(image, format, quality, file, path)
}

/// Encode `image` into an already opened `file`; `path` is only used for
/// messages.
pub fn encode_to_file(
    image: &Image,
    format: OutputFormat,
    quality: u8,
    file: File,
    path: &Path,
) -> Result<(), AppError> {
    let mut writer = BufWriter::new(file);
    encode_to_writer(image, format, quality, &mut writer)?;
    writer
        .flush()
        .map_err(|e| AppError::Encode(format!("{}: {e}", path.display())))?;
    tracing::debug!(
        path = %path.display(),
        %format,
        width = image.width(),
        height = image.height(),
        "Encoded image"
    );
    Ok(())
}

/// Encode `image` into any writer. `quality` (1..=100) applies to JPEG only.
pub fn encode_to_writer<W: Write>(
    image: &Image,
    format: OutputFormat,
    quality: u8,
    writer: W,
) -> Result<(), AppError> {
    if !(1..=100).contains(&quality) {
        return Err(AppError::Encode(format!(
            "quality must be between 1 and 100, got {quality}"
        )));
    }
    let bytes = image.to_rgb_bytes();
    let (width, height) = (image.width(), image.height());
    let result = match format {
        OutputFormat::Png => {
            PngEncoder::new(writer).write_image(&bytes, width, height, ExtendedColorType::Rgb8)
        }
        OutputFormat::Jpeg => JpegEncoder::new_with_quality(writer, quality).write_image(
            &bytes,
            width,
            height,
            ExtendedColorType::Rgb8,
        ),
    };
    result.map_err(|e| AppError::Encode(e.to_string()))
}

/// Size of a `width` x `height` image scaled down to fit inside
/// `max_width` x `max_height`, aspect ratio kept. Never scales up.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Lanczos3 downscale to fit inside the bound. Images already inside it
/// are returned unchanged.
pub fn resize(image: &Image, max_width: u32, max_height: u32) -> Result<Image, AppError> {
    if max_width == 0 || max_height == 0 {
        return Err(ToneError::InvalidParameter(format!(
            "resize bound must be positive, got {max_width}x{max_height}"
        ))
        .into());
    }
    let (width, height) = fit_within(image.width(), image.height(), max_width, max_height);
    if (width, height) == (image.width(), image.height()) {
        return Ok(image.clone());
    }

    let buffer = rgb_buffer(image.width(), image.height(), image.to_rgb_bytes())?;
    let resized = imageops::resize(&buffer, width, height, FilterType::Lanczos3);
    tracing::debug!(
        from_width = image.width(),
        from_height = image.height(),
        width,
        height,
        "Resized image"
    );
    Ok(Image::from_rgb_bytes(width, height, resized.as_raw())?)
}

fn rgb_buffer(width: u32, height: u32, bytes: Vec<u8>) -> Result<RgbImage, ToneError> {
    let len = bytes.len();
    RgbImage::from_raw(width, height, bytes).ok_or_else(|| {
        ToneError::InvalidParameter(format!(
            "{len} bytes do not make a {width}x{height} RGB buffer"
        ))
    })
}

pub fn crop(image: &Image, region: Region) -> Result<Image, AppError> {
    Ok(image.crop(region)?)
}

/// Copy of `image` with the interior grid lines drawn in, one pixel wide,
/// as 50% black over the underlying pixels.
pub fn burn_grid(image: &Image, spec: GridSpec) -> Result<Image, AppError> {
    let (width, height) = (image.width(), image.height());
    let lines = grid_lines(spec, DisplayGeometry::native(width, height)?);
    let (horizontal, vertical) = lines.interior();

    let to_index = |offset: f64, extent: u32| (offset.round() as u32).min(extent - 1);
    let mut on_line = vec![false; width as usize * height as usize];
    for &y in horizontal {
        let row = to_index(y, height) as usize * width as usize;
        on_line[row..row + width as usize].fill(true);
    }
    for &x in vertical {
        let col = to_index(x, width) as usize;
        for row in 0..height as usize {
            on_line[row * width as usize + col] = true;
        }
    }

    let pixels = image
        .pixels()
        .iter()
        .zip(&on_line)
        .map(|(&p, &line)| if line { darken(p) } else { p })
        .collect();
    Ok(Image::new(width, height, pixels)?)
}

fn darken(p: ColorSample) -> ColorSample {
    ColorSample::new(p.r / 2, p.g / 2, p.b / 2)
}
