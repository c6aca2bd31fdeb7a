//! Band boundaries between tone levels.

use super::contrast::{Contrast, ContrastCurve};
use super::table::{ToneTable, MIN_GAP};

/// The `K - 1` interior boundaries separating `K` tone bands.
///
/// Band `j` covers `bounds[j - 1] <= lum < bounds[j]`, with implicit outer
/// boundaries at 0 and 1. Luminance 1.0 falls in the top band.
///
/// Invariants, for every curve and contrast:
/// - boundaries are strictly increasing;
/// - each representative tone lies inside its own band, so quantizing an
///   already-quantized image with the same settings is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    bounds: Vec<f32>,
}

impl Thresholds {
    /// Boundaries for `table` under `contrast` as shaped by `curve`.
    ///
    /// The neutral boundary `i / K` is warped by the curve and then held
    /// within `(lum(rep[i - 1]), lum(rep[i])]`.
    pub fn new(table: &ToneTable, contrast: Contrast, curve: &dyn ContrastCurve) -> Self {
        let levels = table.levels();
        let bounds = (1..levels)
            .map(|i| {
                let neutral = i as f32 / levels as f32;
                let warped = curve.warp(neutral, contrast);
                let warped = if warped.is_finite() { warped } else { neutral };
                let lo = table.luminance(i - 1) + MIN_GAP;
                let hi = table.luminance(i);
                warped.clamp(lo, hi)
            })
            .collect();
        Self { bounds }
    }

    /// Number of bands.
    #[inline]
    pub fn levels(&self) -> usize {
        self.bounds.len() + 1
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.bounds
    }

    /// Band index for a luminance value.
    #[inline]
    pub fn level_of(&self, lum: f32) -> usize {
        self.bounds.partition_point(|&b| b <= lum)
    }

    /// `(lower, upper)` luminance range of every band, 0 and 1 included.
    pub fn bands(&self) -> Vec<(f32, f32)> {
        let mut edges = Vec::with_capacity(self.bounds.len() + 2);
        edges.push(0.0);
        edges.extend_from_slice(&self.bounds);
        edges.push(1.0);
        edges.windows(2).map(|w| (w[0], w[1])).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::contrast::{LinearContrast, SigmoidContrast};
    use crate::tone::table::{MAX_LEVELS, MIN_LEVELS};

    #[test]
    fn test_neutral_thresholds_are_even() {
        for levels in MIN_LEVELS..=MAX_LEVELS {
            let table = ToneTable::for_levels(levels).unwrap();
            let thresholds =
                Thresholds::new(&table, Contrast::NEUTRAL, &LinearContrast::default());
            assert_eq!(thresholds.levels(), levels);
            for (i, &b) in thresholds.as_slice().iter().enumerate() {
                let expected = (i + 1) as f32 / levels as f32;
                assert!(
                    (b - expected).abs() < 1e-6,
                    "K={levels}: boundary {} is {b}, expected {expected}",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_two_tone_splits_at_half() {
        let table = ToneTable::for_levels(2).unwrap();
        let t = Thresholds::new(&table, Contrast::NEUTRAL, &LinearContrast::default());
        assert_eq!(t.as_slice(), &[0.5]);
        assert_eq!(t.level_of(0.0), 0);
        assert_eq!(t.level_of(0.499), 0);
        assert_eq!(t.level_of(0.5), 1);
        assert_eq!(t.level_of(1.0), 1);
    }

    #[test]
    fn test_strong_contrast_stays_ordered() {
        let curves: [&dyn ContrastCurve; 4] = [
            &LinearContrast::default(),
            &SigmoidContrast::default(),
            &LinearContrast { gain: 1000.0 },
            &SigmoidContrast { gain: 1000.0 },
        ];
        for curve in curves {
            for levels in MIN_LEVELS..=MAX_LEVELS {
                let table = ToneTable::for_levels(levels).unwrap();
                for c in [0.0, 0.05, 0.4, 0.6, 1.0] {
                    let t = Thresholds::new(&table, Contrast::new(c).unwrap(), curve);
                    for w in t.as_slice().windows(2) {
                        assert!(
                            w[0] < w[1],
                            "{curve:?} K={levels} c={c}: {:?} not increasing",
                            t.as_slice()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_representatives_stay_in_their_band() {
        let curves: [&dyn ContrastCurve; 2] =
            [&LinearContrast { gain: 50.0 }, &SigmoidContrast { gain: 50.0 }];
        for curve in curves {
            for levels in MIN_LEVELS..=MAX_LEVELS {
                let table = ToneTable::for_levels(levels).unwrap();
                for c in [0.0, 0.25, 0.5, 0.75, 1.0] {
                    let t = Thresholds::new(&table, Contrast::new(c).unwrap(), curve);
                    for j in 0..levels {
                        assert_eq!(
                            t.level_of(table.luminance(j)),
                            j,
                            "{curve:?} K={levels} c={c}: representative {j} moved"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_contrast_pushes_midtones_outward() {
        let table = ToneTable::for_levels(3).unwrap();
        let neutral = Thresholds::new(&table, Contrast::NEUTRAL, &LinearContrast::default());
        let strong = Thresholds::new(
            &table,
            Contrast::new(1.0).unwrap(),
            &LinearContrast::default(),
        );
        // 0.4 is mid-gray at neutral but drops to black under strong contrast
        assert_eq!(neutral.level_of(0.4), 1);
        assert_eq!(strong.level_of(0.4), 0);
        assert_eq!(neutral.level_of(0.6), 1);
        assert_eq!(strong.level_of(0.6), 2);
    }

    #[test]
    fn test_bands_cover_unit_range() {
        let table = ToneTable::for_levels(4).unwrap();
        let t = Thresholds::new(&table, Contrast::NEUTRAL, &LinearContrast::default());
        let bands = t.bands();
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].0, 0.0);
        assert_eq!(bands[3].1, 1.0);
        for w in bands.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
    }
}
