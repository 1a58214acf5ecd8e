//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels and rows.
//! Pixels are stored row-major, one byte each.

use super::{Glyph, GlyphMut};
use crate::error::{Error, Result};

impl Glyph {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width() as usize;
        let start = (y as usize) * w;
        &self.data()[start..start + w]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data().chunks_exact(self.width() as usize)
    }
}

impl GlyphMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[self.offset(x, y)])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let offset = self.offset(x, y);
        self.data_mut()[offset] = val;
    }

    /// Fill a rectangle, clipped to the glyph bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, val: u8) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        for yy in y.min(y_end)..y_end {
            for xx in x.min(x_end)..x_end {
                self.set_pixel_unchecked(xx, yy, val);
            }
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width() as usize) + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{BACKGROUND, INK};

    #[test]
    fn test_set_get_pixel() {
        let mut glyph = Glyph::new(8, 4).unwrap().to_mut();
        glyph.set_pixel(3, 2, INK).unwrap();
        assert_eq!(glyph.get_pixel(3, 2), Some(INK));
        assert!(glyph.set_pixel(8, 0, INK).is_err());
        assert!(glyph.get_pixel(0, 4).is_none());

        let glyph: Glyph = glyph.into();
        assert_eq!(glyph.get_pixel(3, 2), Some(INK));
        assert_eq!(glyph.get_pixel(2, 3), Some(BACKGROUND));
        assert_eq!(glyph.row(2)[3], INK);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut glyph = Glyph::new(5, 5).unwrap().to_mut();
        glyph.fill_rect(3, 3, 10, 10, INK);
        let glyph: Glyph = glyph.into();
        let ink = glyph.data().iter().filter(|&&v| v == INK).count();
        assert_eq!(ink, 4);
    }

    #[test]
    fn test_rows() {
        let glyph = Glyph::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u8]> = glyph.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2, 3][..], &[4u8, 5, 6][..]]);
    }
}
