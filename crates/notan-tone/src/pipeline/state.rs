use std::fmt;

use crate::error::ToneError;
use crate::geometry::DisplayGeometry;
use crate::raster::{Image, Region};
use crate::tone::{Contrast, ToneQuantizer};

use super::sink::ImageSink;

/// How the current image was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Selected,
    Cropped,
    Quantized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Selected => "selected",
            Stage::Cropped => "cropped",
            Stage::Quantized => "quantized",
        })
    }
}

/// Which image is current, and what may be done with it.
///
/// ```text
/// Empty ──select──> Selected ──crop──────> Cropped
///                      │                      │
///                      └──quantize──> Quantized <──┘
///
/// crop / quantize are re-entrant on whatever is current;
/// select from any state starts over at Selected.
/// ```
///
/// Every successful transition installs a brand-new current image; a failed
/// one leaves the state exactly as it was. Callers must serialize
/// transitions on one instance.
///
/// # Example
///
/// ```
/// use notan_tone::{ColorSample, Contrast, Image, PipelineState, Region, Stage};
///
/// let mut state = PipelineState::new();
/// state.select(Image::filled(300, 300, ColorSample::gray(60)).unwrap());
/// state.crop(Region::new(0, 0, 150, 150)).unwrap();
/// state.quantize(2, Contrast::NEUTRAL).unwrap();
///
/// assert_eq!(state.stage(), Some(Stage::Quantized));
/// assert_eq!(state.current().unwrap().width(), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PipelineState {
    #[default]
    Empty,
    Active { current: Image, stage: Stage },
}

impl PipelineState {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Make `image` current, discarding anything derived earlier.
    pub fn select(&mut self, image: Image) {
        *self = PipelineState::Active {
            current: image,
            stage: Stage::Selected,
        };
    }

    /// Replace the current image with its sub-image under `region`.
    ///
    /// # Errors
    ///
    /// [`ToneError::NoImage`] when empty, [`ToneError::InvalidRegion`] when
    /// the region does not fit the current image.
    pub fn crop(&mut self, region: Region) -> Result<(), ToneError> {
        let cropped = self.require_current()?.crop(region)?;
        self.install(cropped, Stage::Cropped);
        Ok(())
    }

    /// Quantize the current image with the built-in `levels`-tone table.
    ///
    /// # Errors
    ///
    /// [`ToneError::NoImage`] when empty, [`ToneError::InvalidParameter`]
    /// for a bad level count.
    pub fn quantize(&mut self, levels: usize, contrast: Contrast) -> Result<(), ToneError> {
        self.require_current()?;
        let quantizer = ToneQuantizer::new(levels)?.contrast(contrast);
        self.apply(&quantizer)
    }

    /// Quantize the current image with a fully configured quantizer.
    pub fn apply(&mut self, quantizer: &ToneQuantizer) -> Result<(), ToneError> {
        let quantized = quantizer.quantize(self.require_current()?);
        self.install(quantized, Stage::Quantized);
        Ok(())
    }

    /// Hand the current image to `sink`. The state does not change.
    ///
    /// # Errors
    ///
    /// [`ToneError::NoImage`] when empty, [`ToneError::Encode`] if the sink
    /// fails.
    pub fn save<S: ImageSink>(&self, sink: &S) -> Result<S::Receipt, ToneError> {
        let current = self.require_current()?;
        sink.write(current).map_err(|e| ToneError::Encode(e.to_string()))
    }

    /// Back to `Empty`.
    pub fn reset(&mut self) {
        *self = PipelineState::Empty;
    }

    pub fn current(&self) -> Option<&Image> {
        match self {
            PipelineState::Empty => None,
            PipelineState::Active { current, .. } => Some(current),
        }
    }

    /// `None` while empty.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Empty => None,
            PipelineState::Active { stage, .. } => Some(*stage),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, PipelineState::Empty)
    }

    /// Geometry of the current image scaled to fill `viewport_width`.
    pub fn display_geometry(&self, viewport_width: f64) -> Result<DisplayGeometry, ToneError> {
        let current = self.require_current()?;
        DisplayGeometry::fit_width(current.width(), current.height(), viewport_width)
    }

    fn require_current(&self) -> Result<&Image, ToneError> {
        self.current().ok_or(ToneError::NoImage)
    }

    fn install(&mut self, image: Image, stage: Stage) {
        *self = PipelineState::Active {
            current: image,
            stage,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSample;
    use std::cell::RefCell;

    fn gray(width: u32, height: u32, value: u8) -> Image {
        Image::filled(width, height, ColorSample::gray(value)).unwrap()
    }

    /// Records every image it is given.
    #[derive(Default)]
    struct RecordingSink {
        written: RefCell<Vec<Image>>,
    }

    impl ImageSink for RecordingSink {
        type Receipt = usize;
        type Error = String;

        fn write(&self, image: &Image) -> Result<usize, String> {
            self.written.borrow_mut().push(image.clone());
            Ok(self.written.borrow().len())
        }
    }

    struct FailingSink;

    impl ImageSink for FailingSink {
        type Receipt = ();
        type Error = &'static str;

        fn write(&self, _image: &Image) -> Result<(), &'static str> {
            Err("disk full")
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = PipelineState::new();
        assert!(state.is_empty());
        assert_eq!(state.stage(), None);
        assert!(state.current().is_none());
        assert_eq!(state, PipelineState::default());
    }

    #[test]
    fn test_operations_from_empty_fail_with_no_image() {
        let mut state = PipelineState::new();
        assert_eq!(state.save(&RecordingSink::default()), Err(ToneError::NoImage));
        assert_eq!(state.crop(Region::new(0, 0, 1, 1)), Err(ToneError::NoImage));
        assert_eq!(
            state.quantize(2, Contrast::NEUTRAL),
            Err(ToneError::NoImage)
        );
        assert_eq!(state.display_geometry(300.0), Err(ToneError::NoImage));
        assert!(state.is_empty());
    }

    #[test]
    fn test_select_crop_quantize() {
        let mut state = PipelineState::new();
        state.select(gray(300, 200, 200));
        assert_eq!(state.stage(), Some(Stage::Selected));

        state.crop(Region::new(10, 10, 150, 150)).unwrap();
        assert_eq!(state.stage(), Some(Stage::Cropped));
        assert_eq!(state.current().unwrap().width(), 150);

        state.quantize(3, Contrast::NEUTRAL).unwrap();
        assert_eq!(state.stage(), Some(Stage::Quantized));
        let current = state.current().unwrap();
        assert_eq!((current.width(), current.height()), (150, 150));
        assert!(current.pixels().iter().all(|&p| p == ColorSample::WHITE));
    }

    #[test]
    fn test_quantized_is_reentrant() {
        let mut state = PipelineState::new();
        state.select(gray(100, 100, 120));
        state.quantize(4, Contrast::NEUTRAL).unwrap();
        state.crop(Region::new(0, 0, 50, 40)).unwrap();
        assert_eq!(state.stage(), Some(Stage::Cropped));
        state.quantize(2, Contrast::NEUTRAL).unwrap();
        assert_eq!(state.stage(), Some(Stage::Quantized));
        assert_eq!(state.current().unwrap().height(), 40);
    }

    #[test]
    fn test_select_discards_derived_images() {
        let mut state = PipelineState::new();
        state.select(gray(10, 10, 30));
        state.quantize(2, Contrast::NEUTRAL).unwrap();

        let replacement = gray(20, 5, 250);
        state.select(replacement.clone());
        assert_eq!(state.stage(), Some(Stage::Selected));
        assert_eq!(state.current(), Some(&replacement));
    }

    #[test]
    fn test_failed_transitions_leave_state_unchanged() {
        let mut state = PipelineState::new();
        state.select(gray(50, 50, 90));
        let before = state.clone();

        assert!(matches!(
            state.crop(Region::new(40, 40, 20, 20)),
            Err(ToneError::InvalidRegion { .. })
        ));
        assert_eq!(state, before);

        assert!(matches!(
            state.quantize(1, Contrast::NEUTRAL),
            Err(ToneError::InvalidParameter(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_save_hands_over_current_without_transition() {
        let mut state = PipelineState::new();
        state.select(gray(8, 8, 10));
        state.quantize(2, Contrast::NEUTRAL).unwrap();
        let before = state.clone();

        let sink = RecordingSink::default();
        assert_eq!(state.save(&sink), Ok(1));
        assert_eq!(state, before);
        assert_eq!(sink.written.borrow()[0], *state.current().unwrap());
    }

    #[test]
    fn test_save_allowed_in_selected_and_cropped() {
        let mut state = PipelineState::new();
        let sink = RecordingSink::default();
        state.select(gray(8, 8, 10));
        assert!(state.save(&sink).is_ok());
        state.crop(Region::new(0, 0, 4, 4)).unwrap();
        assert!(state.save(&sink).is_ok());
        assert_eq!(sink.written.borrow().len(), 2);
    }

    #[test]
    fn test_save_failure_maps_to_encode() {
        let mut state = PipelineState::new();
        state.select(gray(2, 2, 0));
        assert_eq!(
            state.save(&FailingSink),
            Err(ToneError::Encode("disk full".to_string()))
        );
        assert_eq!(state.stage(), Some(Stage::Selected));
    }

    #[test]
    fn test_reset() {
        let mut state = PipelineState::new();
        state.select(gray(2, 2, 0));
        state.reset();
        assert!(state.is_empty());
    }

    #[test]
    fn test_display_geometry_follows_current() {
        let mut state = PipelineState::new();
        state.select(gray(600, 400, 0));
        let g = state.display_geometry(300.0).unwrap();
        assert_eq!(g.rendered_height(), 200.0);

        state.crop(Region::new(0, 0, 150, 150)).unwrap();
        let g = state.display_geometry(300.0).unwrap();
        assert_eq!(g.rendered_height(), 300.0);
    }
}
