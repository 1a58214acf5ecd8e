//! Error types for glyphmatch-core
//!
//! Provides a unified error type for glyph construction, pixel access,
//! rasterization and glyph image IO. Rasterizer implementations report
//! their failures through this type so that callers can propagate them
//! unchanged.

use thiserror::Error;

/// Glyphmatch core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid glyph dimensions
    #[error("invalid glyph dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates outside the glyph
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} glyph")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw buffer does not match the declared dimensions
    #[error("data length mismatch: expected {expected} bytes, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested font is not known to the rasterizer
    #[error("font not found: {0}")]
    FontNotFound(String),

    /// The font has no glyph for the requested symbol
    #[error("symbol {symbol:?} is not supported by font {font}")]
    UnsupportedSymbol { symbol: char, font: String },

    /// IO error while reading or writing a glyph
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoded glyph data could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// Glyph could not be encoded
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type alias for glyphmatch core operations
pub type Result<T> = std::result::Result<T, Error>;
