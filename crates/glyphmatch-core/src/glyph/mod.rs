//! Glyph - single-symbol grayscale bitmap
//!
//! The `Glyph` structure is the image type consumed by the recognizer.
//! It holds one 8-bit intensity per pixel, row-major, with no padding.
//!
//! # Pixel values
//!
//! - `0` is full ink (black)
//! - `255` is background (white)
//!
//! # Ownership model
//!
//! `Glyph` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `GlyphMut` via [`Glyph::try_into_mut`]
//! or [`Glyph::to_mut`], then convert back with `Into<Glyph>`.

mod access;
mod border;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel value of the white background.
pub const BACKGROUND: u8 = 255;

/// Pixel value of full black ink.
pub const INK: u8 = 0;

/// Largest pixel count a glyph may have.
pub const MAX_GLYPH_PIXELS: u64 = 1 << 28;

/// Pixel count of a `width` x `height` glyph.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if a dimension is 0 or the area
/// exceeds [`MAX_GLYPH_PIXELS`].
pub fn checked_area(width: u32, height: u32) -> Result<usize> {
    let area = (width as u64) * (height as u64);
    if area == 0 || area > MAX_GLYPH_PIXELS {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(area as usize)
}

/// The symbol and rendering configuration a glyph was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSource {
    /// Symbol that was rendered
    pub symbol: char,
    /// Configuration it was rendered with
    pub config: RenderConfig,
}

/// Internal glyph data
#[derive(Debug, Clone)]
struct GlyphData {
    width: u32,
    height: u32,
    source: Option<GlyphSource>,
    data: Vec<u8>,
}

/// Glyph - immutable grayscale bitmap
///
/// # Examples
///
/// ```
/// use glyphmatch_core::Glyph;
///
/// let glyph = Glyph::new(12, 16).unwrap();
/// assert_eq!(glyph.width(), 12);
/// assert_eq!(glyph.get_pixel(0, 0), Some(255));
/// ```
#[derive(Debug, Clone)]
pub struct Glyph {
    inner: Arc<GlyphData>,
}

impl Glyph {
    /// Create a new glyph filled with the background value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, BACKGROUND)
    }

    /// Create a new glyph with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero or oversized area.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let data = vec![value; checked_area(width, height)?];
        Ok(Glyph {
            inner: Arc::new(GlyphData {
                width,
                height,
                source: None,
                data,
            }),
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Glyph {
            inner: Arc::new(GlyphData {
                width,
                height,
                source: None,
                data,
            }),
        })
    }

    /// Get the glyph width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the glyph height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn area(&self) -> usize {
        self.inner.data.len()
    }

    /// Get the symbol/configuration this glyph was rendered from, if known.
    #[inline]
    pub fn source(&self) -> Option<&GlyphSource> {
        self.inner.source.as_ref()
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this glyph.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<GlyphMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(GlyphMut { inner: data }),
            Err(arc) => Err(Glyph { inner: arc }),
        }
    }

    /// Create a mutable copy of this glyph.
    pub fn to_mut(&self) -> GlyphMut {
        GlyphMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Return this glyph tagged with the symbol/configuration it came from.
    pub fn with_source(self, symbol: char, config: RenderConfig) -> Glyph {
        let mut glyph = self.try_into_mut().unwrap_or_else(|g| g.to_mut());
        glyph.set_source(Some(GlyphSource { symbol, config }));
        glyph.into()
    }

    /// Check whether two glyphs have identical dimensions and pixels.
    ///
    /// The source tag is not compared.
    pub fn same_pixels(&self, other: &Glyph) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.data() == other.data()
    }
}

/// Mutable glyph
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Glyph`] using `Into<Glyph>`.
#[derive(Debug)]
pub struct GlyphMut {
    inner: GlyphData,
}

impl GlyphMut {
    /// Get the glyph width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the glyph height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Set the source tag.
    pub fn set_source(&mut self, source: Option<GlyphSource>) {
        self.inner.source = source;
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<GlyphMut> for Glyph {
    fn from(glyph: GlyphMut) -> Self {
        Glyph {
            inner: Arc::new(glyph.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_creation() {
        let glyph = Glyph::new(100, 50).unwrap();
        assert_eq!(glyph.width(), 100);
        assert_eq!(glyph.height(), 50);
        assert_eq!(glyph.area(), 5000);
        assert!(glyph.data().iter().all(|&v| v == BACKGROUND));
        assert!(glyph.source().is_none());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Glyph::new(0, 10).is_err());
        assert!(Glyph::new(10, 0).is_err());
        assert!(Glyph::new_filled(0, 0, INK).is_err());
    }

    #[test]
    fn test_checked_area() {
        assert_eq!(checked_area(3, 4).unwrap(), 12);
        assert!(checked_area(0, 4).is_err());
        assert!(checked_area(u32::MAX, u32::MAX).is_err());
        assert!(Glyph::new(1 << 15, 1 << 14).is_err());
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(Glyph::from_raw(2, 2, vec![0; 4]).is_ok());
        let err = Glyph::from_raw(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataLength {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_glyph_clone_shares_data() {
        let glyph1 = Glyph::new(10, 10).unwrap();
        let glyph2 = glyph1.clone();
        assert_eq!(glyph1.ref_count(), 2);
        assert_eq!(glyph2.ref_count(), 2);
    }

    #[test]
    fn test_try_into_mut() {
        let glyph = Glyph::new(10, 10).unwrap();
        let mut glyph_mut = glyph.try_into_mut().unwrap();
        glyph_mut.data_mut()[0] = INK;
        let glyph: Glyph = glyph_mut.into();
        assert_eq!(glyph.data()[0], INK);

        let shared = glyph.clone();
        assert!(glyph.try_into_mut().is_err());
        assert_eq!(shared.ref_count(), 1);
    }

    #[test]
    fn test_with_source() {
        let config = RenderConfig::default();
        let glyph = Glyph::new(4, 4).unwrap().with_source('A', config.clone());
        let source = glyph.source().unwrap();
        assert_eq!(source.symbol, 'A');
        assert_eq!(source.config, config);
    }

    #[test]
    fn test_same_pixels_ignores_source() {
        let a = Glyph::new(3, 3).unwrap();
        let b = Glyph::new(3, 3).unwrap().with_source('B', RenderConfig::default());
        assert!(a.same_pixels(&b));
        let c = Glyph::new(3, 4).unwrap();
        assert!(!a.same_pixels(&c));
    }
}
