//! Unified error type for the notan-tone public API.
//!
//! [`ToneError`] covers every failure the core can report. Callers receive
//! it directly; nothing in this crate substitutes a fallback image.

use thiserror::Error;

/// Errors returned by quantization, geometry and pipeline operations.
///
/// # Example
///
/// ```
/// use notan_tone::{ToneError, ToneQuantizer};
///
/// let err = ToneQuantizer::new(1).err().unwrap();
/// assert!(matches!(err, ToneError::InvalidParameter(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToneError {
    /// A numeric parameter is outside its accepted range (level count,
    /// contrast, grid divisions, display size, buffer length).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The image has zero width or zero height.
    #[error("image has zero area")]
    EmptyImage,

    /// A crop region falls outside the image or has zero area.
    #[error("invalid region {x},{y} {width}x{height} for {image_width}x{image_height} image")]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// The operation needs a current image but none has been selected.
    #[error("no image selected")]
    NoImage,

    /// The external encoder/writer rejected the image. The cause is opaque.
    #[error("encode error: {0}")]
    Encode(String),
}

impl ToneError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ToneError::InvalidParameter(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let error = ToneError::invalid("levels must be at least 2, got 1");
        assert_eq!(
            error.to_string(),
            "invalid parameter: levels must be at least 2, got 1"
        );
    }

    #[test]
    fn test_invalid_region_message() {
        let error = ToneError::InvalidRegion {
            x: 10,
            y: 20,
            width: 300,
            height: 40,
            image_width: 200,
            image_height: 100,
        };
        assert_eq!(
            error.to_string(),
            "invalid region 10,20 300x40 for 200x100 image"
        );
    }

    #[test]
    fn test_simple_variants() {
        assert_eq!(ToneError::EmptyImage.to_string(), "image has zero area");
        assert_eq!(ToneError::NoImage.to_string(), "no image selected");
        assert_eq!(
            ToneError::Encode("disk full".to_string()).to_string(),
            "encode error: disk full"
        );
    }
}
