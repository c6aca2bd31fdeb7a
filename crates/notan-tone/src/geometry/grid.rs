use crate::error::ToneError;

use super::display::DisplayGeometry;

/// Largest accepted row or column count.
pub const MAX_GRID_DIVISIONS: u32 = 60;

/// Number of grid rows and columns, each in `1..=MAX_GRID_DIVISIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
}

impl GridSpec {
    /// # Errors
    ///
    /// [`ToneError::InvalidParameter`] if either count is zero or above
    /// [`MAX_GRID_DIVISIONS`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, ToneError> {
        for (name, value) in [("rows", rows), ("cols", cols)] {
            if !(1..=MAX_GRID_DIVISIONS).contains(&value) {
                return Err(ToneError::invalid(format!(
                    "{name} must be between 1 and {MAX_GRID_DIVISIONS}, got {value}"
                )));
            }
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }
}

impl Default for GridSpec {
    /// 3x3, the rule-of-thirds grid.
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

/// Grid line offsets in display coordinates.
///
/// `horizontal` holds y offsets from the top edge, `vertical` x offsets from
/// the left edge. Each list is ascending and ends with the boundary line,
/// which equals the rendered height (or width) exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    pub horizontal: Vec<f64>,
    pub vertical: Vec<f64>,
}

impl GridLines {
    /// The lines an overlay draws: everything but the boundary lines.
    pub fn interior(&self) -> (&[f64], &[f64]) {
        let strip = |lines: &[f64]| -> usize { lines.len().saturating_sub(1) };
        (
            &self.horizontal[..strip(&self.horizontal)],
            &self.vertical[..strip(&self.vertical)],
        )
    }
}

/// Grid line positions for `spec` over an image shown at `geometry`.
///
/// Pure: call it again whenever the displayed image or its size changes.
///
/// ```
/// use notan_tone::{grid_lines, DisplayGeometry, GridSpec};
///
/// let lines = grid_lines(
///     GridSpec::new(3, 3).unwrap(),
///     DisplayGeometry::new(300.0, 300.0).unwrap(),
/// );
/// assert_eq!(lines.horizontal, vec![100.0, 200.0, 300.0]);
/// assert_eq!(lines.vertical, vec![100.0, 200.0, 300.0]);
/// ```
pub fn grid_lines(spec: GridSpec, geometry: DisplayGeometry) -> GridLines {
    GridLines {
        horizontal: divide(geometry.rendered_height(), spec.rows()),
        vertical: divide(geometry.rendered_width(), spec.cols()),
    }
}

/// `count - 1` evenly spaced interior offsets, then `extent` itself.
fn divide(extent: f64, count: u32) -> Vec<f64> {
    let step = extent / count as f64;
    (1..count)
        .map(|i| i as f64 * step)
        .chain(std::iter::once(extent))
        .collect()
}
