//! Border and crop operations
//!
//! - Uniform borders (the rendering margin around a symbol)
//! - Cropping to the ink bounding box

use super::{Glyph, GlyphMut};
use crate::error::{Error, Result};

impl Glyph {
    /// Add a uniform border around the glyph.
    ///
    /// Creates a new glyph with `npix` pixels of border on all sides,
    /// filled with `val`. A zero border returns a clone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the padded size overflows.
    pub fn add_border(&self, npix: u32, val: u8) -> Result<Glyph> {
        if npix == 0 {
            return Ok(self.clone());
        }
        let dims = npix
            .checked_mul(2)
            .and_then(|p| Some((self.width().checked_add(p)?, self.height().checked_add(p)?)));
        let Some((w, h)) = dims else {
            return Err(Error::InvalidDimension {
                width: self.width(),
                height: self.height(),
            });
        };

        let mut out = Glyph::new_filled(w, h, val)?.to_mut();
        copy_into(&mut out, self, npix, npix);
        out.set_source(self.source().cloned());
        Ok(out.into())
    }

    /// Bounding box `(x, y, w, h)` of pixels darker than `threshold`.
    ///
    /// Returns `None` for a glyph with no such pixels.
    pub fn foreground_bounds(&self, threshold: u8) -> Option<(u32, u32, u32, u32)> {
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0;
        let mut max_y = 0;
        let mut found = false;

        for (y, row) in self.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v < threshold {
                    let (x, y) = (x as u32, y as u32);
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                    found = true;
                }
            }
        }

        found.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    /// Crop to a rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rectangle is empty or
    /// extends past the glyph.
    pub fn clip_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Glyph> {
        let fits = x.checked_add(w).is_some_and(|r| r <= self.width())
            && y.checked_add(h).is_some_and(|b| b <= self.height());
        if w == 0 || h == 0 || !fits {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle ({x}, {y}, {w}, {h}) outside {}x{} glyph",
                self.width(),
                self.height()
            )));
        }

        let mut data = Vec::with_capacity((w as usize) * (h as usize));
        for row in self.rows().skip(y as usize).take(h as usize) {
            data.extend_from_slice(&row[x as usize..(x + w) as usize]);
        }
        let mut out = Glyph::from_raw(w, h, data)?.to_mut();
        out.set_source(self.source().cloned());
        Ok(out.into())
    }

    /// Crop to the ink bounding box.
    ///
    /// A glyph without ink is returned unchanged.
    pub fn clip_to_foreground(&self, threshold: u8) -> Result<Glyph> {
        match self.foreground_bounds(threshold) {
            Some((x, y, w, h)) => self.clip_rect(x, y, w, h),
            None => Ok(self.clone()),
        }
    }
}

fn copy_into(dst: &mut GlyphMut, src: &Glyph, dx: u32, dy: u32) {
    let dst_w = dst.width() as usize;
    let src_w = src.width() as usize;
    for (y, row) in src.rows().enumerate() {
        let start = (y + dy as usize) * dst_w + dx as usize;
        dst.data_mut()[start..start + src_w].copy_from_slice(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{BACKGROUND, INK};

    fn dot_glyph() -> Glyph {
        let mut g = Glyph::new(6, 5).unwrap().to_mut();
        g.fill_rect(2, 1, 2, 3, INK);
        g.into()
    }

    #[test]
    fn test_add_border() {
        let g = dot_glyph();
        let bordered = g.add_border(3, BACKGROUND).unwrap();
        assert_eq!(bordered.width(), 12);
        assert_eq!(bordered.height(), 11);
        assert_eq!(bordered.get_pixel(5, 4), Some(INK));
        assert_eq!(bordered.get_pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn test_add_zero_border() {
        let g = dot_glyph();
        assert!(g.add_border(0, BACKGROUND).unwrap().same_pixels(&g));
    }

    #[test]
    fn test_foreground_bounds() {
        let g = dot_glyph();
        assert_eq!(g.foreground_bounds(128), Some((2, 1, 2, 3)));
        assert_eq!(Glyph::new(4, 4).unwrap().foreground_bounds(128), None);
    }

    #[test]
    fn test_clip_to_foreground() {
        let clipped = dot_glyph().clip_to_foreground(128).unwrap();
        assert_eq!(clipped.width(), 2);
        assert_eq!(clipped.height(), 3);
        assert!(clipped.data().iter().all(|&v| v == INK));
    }

    #[test]
    fn test_clip_rect_out_of_range() {
        let g = dot_glyph();
        assert!(g.clip_rect(5, 0, 2, 1).is_err());
        assert!(g.clip_rect(0, 0, 0, 1).is_err());
    }
}
