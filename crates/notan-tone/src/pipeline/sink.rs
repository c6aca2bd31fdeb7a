use std::fmt;

use crate::raster::Image;

/// Destination for a saved image: an encoder, a file writer, a gallery.
///
/// The pipeline only needs to know whether the write succeeded. A sink's
/// error is reported as [`ToneError::Encode`](crate::ToneError::Encode)
/// with its display text.
pub trait ImageSink {
    /// What a successful write hands back (a path, a byte count, ...).
    type Receipt;
    type Error: fmt::Display;

    fn write(&self, image: &Image) -> Result<Self::Receipt, Self::Error>;
}
