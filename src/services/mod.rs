pub mod image_io;
pub mod session;
pub mod sink;

pub use session::Session;
pub use sink::{FileSink, GallerySink, GALLERY_PREFIX};
