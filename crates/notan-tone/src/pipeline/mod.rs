//! Current-image state machine.
//!
//! [`PipelineState`] tracks the one image that is "current" for display and
//! saving. Persisting it goes through an [`ImageSink`] supplied by the
//! caller; this crate performs no I/O of its own.

mod sink;
mod state;

pub use sink::ImageSink;
pub use state::{PipelineState, Stage};
