use crate::error::ToneError;

/// On-screen size of the displayed image, independent of its pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayGeometry {
    rendered_width: f64,
    rendered_height: f64,
}

impl DisplayGeometry {
    /// # Errors
    ///
    /// [`ToneError::InvalidParameter`] unless both sizes are finite and
    /// strictly positive.
    pub fn new(rendered_width: f64, rendered_height: f64) -> Result<Self, ToneError> {
        for (name, value) in [("width", rendered_width), ("height", rendered_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ToneError::invalid(format!(
                    "rendered {name} must be positive, got {value}"
                )));
            }
        }
        Ok(Self {
            rendered_width,
            rendered_height,
        })
    }

    /// Geometry that shows an image at its native pixel size.
    pub fn native(width: u32, height: u32) -> Result<Self, ToneError> {
        Self::new(width as f64, height as f64)
    }

    /// Scale an image to fill `viewport_width`, keeping its aspect ratio.
    ///
    /// ```
    /// use notan_tone::DisplayGeometry;
    ///
    /// let g = DisplayGeometry::fit_width(1200, 800, 300.0).unwrap();
    /// assert_eq!(g.rendered_width(), 300.0);
    /// assert_eq!(g.rendered_height(), 200.0);
    /// ```
    pub fn fit_width(
        native_width: u32,
        native_height: u32,
        viewport_width: f64,
    ) -> Result<Self, ToneError> {
        if native_width == 0 || native_height == 0 {
            return Err(ToneError::EmptyImage);
        }
        let scale = viewport_width / native_width as f64;
        Self::new(viewport_width, native_height as f64 * scale)
    }

    #[inline]
    pub fn rendered_width(&self) -> f64 {
        self.rendered_width
    }

    #[inline]
    pub fn rendered_height(&self) -> f64 {
        self.rendered_height
    }
}
