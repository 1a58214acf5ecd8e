//! Glyph scaling
//!
//! Nearest-neighbour sampling only. Rendered glyphs are two-level, and
//! sampling keeps them two-level and bit-reproducible.

use glyphmatch_core::{Error, Glyph, Result, checked_area};

/// Scale a glyph using nearest-neighbour sampling
///
/// Output dimensions are `round(w * scale_x)` by `round(h * scale_y)`,
/// never less than one pixel.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if a factor is not finite and
/// positive, and [`Error::InvalidDimension`] if the output would be too
/// large.
pub fn scale_by_sampling(glyph: &Glyph, scale_x: f32, scale_y: f32) -> Result<Glyph> {
    if !(scale_x.is_finite() && scale_x > 0.0 && scale_y.is_finite() && scale_y > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "scale factors must be positive: {scale_x} x {scale_y}"
        )));
    }
    let width = (glyph.width() as f32 * scale_x).round();
    let height = (glyph.height() as f32 * scale_y).round();
    if width > u32::MAX as f32 || height > u32::MAX as f32 {
        return Err(Error::InvalidDimension {
            width: width.min(u32::MAX as f32) as u32,
            height: height.min(u32::MAX as f32) as u32,
        });
    }
    scale_to_size(glyph, (width as u32).max(1), (height as u32).max(1))
}

/// Scale a glyph to an exact size using nearest-neighbour sampling
///
/// Each output pixel takes the source pixel under its centre.
pub fn scale_to_size(glyph: &Glyph, width: u32, height: u32) -> Result<Glyph> {
    let area = checked_area(width, height)?;
    if width == glyph.width() && height == glyph.height() {
        return Ok(glyph.clone());
    }

    let ws = glyph.width() as u64;
    let hs = glyph.height() as u64;
    let xmap: Vec<u32> = (0..width as u64)
        .map(|x| ((2 * x + 1) * ws / (2 * width as u64)) as u32)
        .collect();

    let mut data = Vec::with_capacity(area);
    for y in 0..height as u64 {
        let sy = ((2 * y + 1) * hs / (2 * height as u64)) as u32;
        let row = glyph.row(sy);
        data.extend(xmap.iter().map(|&sx| row[sx as usize]));
    }

    let mut out = Glyph::from_raw(width, height, data)?.to_mut();
    out.set_source(glyph.source().cloned());
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmatch_core::{BACKGROUND, INK};

    fn checker() -> Glyph {
        Glyph::from_raw(2, 2, vec![INK, BACKGROUND, BACKGROUND, INK]).unwrap()
    }

    #[test]
    fn test_integer_upscale() {
        let scaled = scale_by_sampling(&checker(), 3.0, 3.0).unwrap();
        assert_eq!(scaled.width(), 6);
        assert_eq!(scaled.height(), 6);
        let ink = scaled.data().iter().filter(|&&v| v == INK).count();
        assert_eq!(ink, 18);
        assert_eq!(scaled.get_pixel(2, 2), Some(INK));
        assert_eq!(scaled.get_pixel(3, 2), Some(BACKGROUND));
    }

    #[test]
    fn test_fractional_scale_is_deterministic() {
        let a = scale_by_sampling(&checker(), 5.2, 5.2).unwrap();
        let b = scale_by_sampling(&checker(), 5.2, 5.2).unwrap();
        assert_eq!(a.width(), 10);
        assert!(a.same_pixels(&b));
    }

    #[test]
    fn test_identity_size() {
        let g = checker();
        assert!(scale_to_size(&g, 2, 2).unwrap().same_pixels(&g));
    }

    #[test]
    fn test_invalid_factors() {
        assert!(scale_by_sampling(&checker(), 0.0, 1.0).is_err());
        assert!(scale_by_sampling(&checker(), 1.0, f32::NAN).is_err());
        assert!(scale_to_size(&checker(), 0, 3).is_err());
    }

    #[test]
    fn test_oversized_output_rejected() {
        let err = scale_by_sampling(&checker(), 1e30, 1e30).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
        let err = scale_to_size(&checker(), u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
        let err = scale_by_sampling(&checker(), 20_000.0, 20_000.0).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
    }
}
