//! Rasterizer interface
//!
//! The recognizer never draws symbols itself. It asks a [`Rasterizer`]
//! for a [`Glyph`] and treats any failure as the caller's problem.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::glyph::Glyph;

/// Renders a single symbol into a glyph bitmap.
///
/// Implementations must be deterministic: identical `(symbol, config)`
/// pairs produce bit-identical glyphs. They must also be shareable across
/// threads, since templates are built in parallel.
pub trait Rasterizer: Sync {
    /// Render `symbol` under `config`.
    ///
    /// # Errors
    ///
    /// Typically [`Error::FontNotFound`](crate::Error::FontNotFound) or
    /// [`Error::UnsupportedSymbol`](crate::Error::UnsupportedSymbol).
    fn render(&self, symbol: char, config: &RenderConfig) -> Result<Glyph>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn render(&self, symbol: char, config: &RenderConfig) -> Result<Glyph> {
        (**self).render(symbol, config)
    }
}
