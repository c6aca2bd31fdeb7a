//! Rectangular crop region in image pixel coordinates.

use std::str::FromStr;

use crate::error::ToneError;

/// A crop rectangle: top-left corner plus size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The largest centered square that fits a `width` x `height` image.
    pub fn centered_square(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self::new((width - side) / 2, (height - side) / 2, side, side)
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the region is non-empty and lies entirely inside the image.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= image_width && b <= image_height)
    }

    pub(crate) fn invalid_for(&self, image_width: u32, image_height: u32) -> ToneError {
        ToneError::InvalidRegion {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            image_width,
            image_height,
        }
    }
}

impl FromStr for Region {
    type Err = ToneError;

    /// Parse `x,y,width,height`.
    ///
    /// ```
    /// use notan_tone::Region;
    ///
    /// let r: Region = "10,20,150,150".parse().unwrap();
    /// assert_eq!(r, Region::new(10, 20, 150, 150));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ToneError::invalid(format!(
                "region must be x,y,width,height, got {s:?}"
            )));
        }
        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| ToneError::invalid(format!("invalid region component {part:?}")))?;
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}
