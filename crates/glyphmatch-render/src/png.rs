//! PNG export and import of glyphs
//!
//! Glyphs are stored as 8-bit grayscale PNGs, which is enough to inspect
//! rendered templates and to feed scanned glyphs back in.

use glyphmatch_core::{Error, Glyph, Result};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Write a glyph as an 8-bit grayscale PNG
pub fn write_png<W: Write>(glyph: &Glyph, writer: W) -> Result<()> {
    let mut encoder = Encoder::new(writer, glyph.width(), glyph.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| Error::Encode(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(glyph.data())
        .map_err(|e| Error::Encode(format!("PNG data error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| Error::Encode(format!("PNG finish error: {}", e)))
}

/// Read an 8-bit grayscale PNG into a glyph
///
/// # Errors
///
/// Returns [`Error::Decode`] for malformed data or any other color type
/// or bit depth.
pub fn read_png<R: BufRead + Seek>(reader: R) -> Result<Glyph> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| Error::Decode(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let (width, height) = (info.width, info.height);
    if (info.color_type, info.bit_depth) != (ColorType::Grayscale, BitDepth::Eight) {
        return Err(Error::Decode(format!(
            "unsupported PNG format: {:?} {:?}",
            info.color_type, info.bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| Error::Decode("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| Error::Decode(format!("PNG frame error: {}", e)))?;

    let line_size = output_info.line_size;
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for row in buf[..output_info.buffer_size()].chunks_exact(line_size) {
        data.extend_from_slice(&row[..width as usize]);
    }
    Glyph::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmatch_core::INK;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_keeps_pixels() {
        let mut g = Glyph::new(7, 3).unwrap().to_mut();
        g.set_pixel(0, 0, INK).unwrap();
        g.set_pixel(6, 2, 100).unwrap();
        let g: Glyph = g.into();

        let mut buffer = Vec::new();
        write_png(&g, &mut buffer).unwrap();
        let back = read_png(Cursor::new(buffer)).unwrap();
        assert!(back.same_pixels(&g));
        assert!(back.source().is_none());
    }

    #[test]
    fn test_read_png_rejects_garbage() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_read_png_rejects_rgb() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 1, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 2, 3]).unwrap();
            writer.finish().unwrap();
        }
        let err = read_png(Cursor::new(buffer)).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
