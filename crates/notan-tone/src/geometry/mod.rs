//! Composition grid geometry.
//!
//! Grid lines are a pure function of a [`GridSpec`] and the current
//! [`DisplayGeometry`]. Nothing here is cached: after a crop or a resize
//! the caller asks again with the new geometry.

mod display;
mod grid;

pub use display::DisplayGeometry;
pub use grid::{grid_lines, GridLines, GridSpec, MAX_GRID_DIVISIONS};
