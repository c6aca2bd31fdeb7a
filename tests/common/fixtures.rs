//! Test images and config snippets.

use notan_tone::{ColorSample, Image};

/// Landscape photo stand-in, larger than the default 300x300 bound
pub const PHOTO_WIDTH: u32 = 600;
pub const PHOTO_HEIGHT: u32 = 400;

/// Diagonal gradient with a color cast, so every channel varies.
pub fn gradient(width: u32, height: u32) -> Image {
    let span = (width + height).max(2) - 1;
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let v = ((x + y) * 255 / span) as u8;
                ColorSample::new(v, v.saturating_sub(20), v / 2 + 60)
            })
        })
        .collect();
    Image::new(width, height, pixels).expect("fixture dimensions are non-zero")
}

/// Left half black, right half white
pub fn split(width: u32, height: u32) -> Image {
    let pixels = (0..height)
        .flat_map(|_| {
            (0..width).map(move |x| {
                if x < width / 2 {
                    ColorSample::BLACK
                } else {
                    ColorSample::WHITE
                }
            })
        })
        .collect();
    Image::new(width, height, pixels).expect("fixture dimensions are non-zero")
}

/// Config with a four-tone sigmoid quantizer and PNG gallery output
pub const FOUR_TONE_YAML: &str = r#"
grid:
  rows: 4
  cols: 4
tone:
  levels: 4
  contrast: 0.7
  curve: sigmoid
output:
  format: png
"#;
