//! Representative colors for each tone level.
//!
//! The tables for two, three and four tones are the classic Notan palettes
//! and are spelled out explicitly. Larger level counts use evenly spaced
//! grays.

use crate::color::{luminance, ColorSample};
use crate::error::ToneError;

/// Fewest tone levels a quantizer accepts.
pub const MIN_LEVELS: usize = 2;

/// Most tone levels a quantizer accepts.
pub const MAX_LEVELS: usize = 16;

/// Smallest luminance step allowed between adjacent representatives.
pub(crate) const MIN_GAP: f32 = 1e-6;

const TWO_TONE: [ColorSample; 2] = [ColorSample::BLACK, ColorSample::WHITE];

const THREE_TONE: [ColorSample; 3] = [
    ColorSample::BLACK,
    ColorSample::gray(128), // mid-gray
    ColorSample::WHITE,
];

const FOUR_TONE: [ColorSample; 4] = [
    ColorSample::BLACK,
    ColorSample::gray(85),  // dark-gray
    ColorSample::gray(170), // mid-gray
    ColorSample::WHITE,
];

/// Level index to representative color, ascending in luminance.
///
/// # Example
///
/// ```
/// use notan_tone::{ColorSample, ToneTable};
///
/// let table = ToneTable::for_levels(3).unwrap();
/// assert_eq!(table.color(0), ColorSample::BLACK);
/// assert_eq!(table.color(1), ColorSample::gray(128));
/// assert_eq!(table.color(2), ColorSample::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToneTable {
    colors: Vec<ColorSample>,
    luminances: Vec<f32>,
}

impl ToneTable {
    /// The built-in table for `levels` tones.
    ///
    /// # Errors
    ///
    /// [`ToneError::InvalidParameter`] unless `levels` is in
    /// `MIN_LEVELS..=MAX_LEVELS`.
    pub fn for_levels(levels: usize) -> Result<Self, ToneError> {
        let colors = match levels {
            2 => TWO_TONE.to_vec(),
            3 => THREE_TONE.to_vec(),
            4 => FOUR_TONE.to_vec(),
            5..=MAX_LEVELS => evenly_spaced_grays(levels),
            _ => {
                return Err(ToneError::invalid(format!(
                    "levels must be between {MIN_LEVELS} and {MAX_LEVELS}, got {levels}"
                )))
            }
        };
        Self::from_colors(colors)
    }

    /// A custom table.
    ///
    /// Each neutral threshold `i / K` has to fall strictly above the
    /// luminance of representative `i - 1` and no higher than that of
    /// representative `i`, so neutral contrast still splits the luminance
    /// range into even bands.
    ///
    /// # Errors
    ///
    /// [`ToneError::InvalidParameter`] if the count is out of range, the
    /// colors are not strictly increasing in luminance, or a neutral
    /// threshold falls outside its pair of representatives.
    pub fn from_colors(colors: Vec<ColorSample>) -> Result<Self, ToneError> {
        if !(MIN_LEVELS..=MAX_LEVELS).contains(&colors.len()) {
            return Err(ToneError::invalid(format!(
                "tone table needs between {MIN_LEVELS} and {MAX_LEVELS} colors, got {}",
                colors.len()
            )));
        }

        let luminances: Vec<f32> = colors.iter().map(|&c| luminance(c)).collect();
        if let Some(i) = luminances.windows(2).position(|w| w[1] - w[0] <= MIN_GAP) {
            return Err(ToneError::invalid(format!(
                "tone table colors must increase in luminance (index {} is not brighter than {})",
                i + 1,
                i
            )));
        }

        let levels = colors.len();
        for i in 1..levels {
            let neutral = i as f32 / levels as f32;
            let (lo, hi) = (luminances[i - 1] + MIN_GAP, luminances[i]);
            if !(lo..=hi).contains(&neutral) {
                return Err(ToneError::invalid(format!(
                    "neutral threshold {neutral:.4} must lie between the luminances \
                     of levels {} ({:.4}) and {i} ({hi:.4})",
                    i - 1,
                    luminances[i - 1]
                )));
            }
        }

        Ok(Self { colors, luminances })
    }

    /// Number of tone levels.
    #[inline]
    pub fn levels(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn color(&self, level: usize) -> ColorSample {
        self.colors[level]
    }

    #[inline]
    pub fn luminance(&self, level: usize) -> f32 {
        self.luminances[level]
    }

    #[inline]
    pub fn colors(&self) -> &[ColorSample] {
        &self.colors
    }
}

fn evenly_spaced_grays(levels: usize) -> Vec<ColorSample> {
    let top = (levels - 1) as f32;
    (0..levels)
        .map(|j| ColorSample::gray((255.0 * j as f32 / top).round() as u8))
        .collect()
}
