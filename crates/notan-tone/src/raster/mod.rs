//! Immutable pixel buffers and crop regions.
//!
//! An [`Image`] is a value: every transformation in this crate (crop,
//! quantize) returns a new one and leaves its input untouched.

mod image;
mod region;

pub use image::Image;
pub use region::Region;
