//! Assertion helpers for tests.

use notan_tone::{ColorSample, Image, ToneTable};
use pretty_assertions::assert_eq;

/// Assert an image has the expected size
pub fn assert_dimensions(image: &Image, width: u32, height: u32) {
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "unexpected image size"
    );
}

/// Assert every pixel is one of the table's tones
pub fn assert_only_tones(image: &Image, table: &ToneTable) {
    for (i, p) in image.pixels().iter().enumerate() {
        assert!(
            table.colors().contains(p),
            "pixel {i} is {p:?}, not one of {:?}",
            table.colors()
        );
    }
}

/// Assert the file exists and starts with the PNG signature
pub fn assert_png_file(path: &std::path::Path) {
    let bytes = std::fs::read(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the file exists and starts with the JPEG SOI marker
pub fn assert_jpeg_file(path: &std::path::Path) {
    let bytes = std::fs::read(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0xFF, 0xD8]),
        "Expected JPEG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Count pixels equal to `color`
pub fn count_color(image: &Image, color: ColorSample) -> usize {
    image.pixels().iter().filter(|&&p| p == color).count()
}
