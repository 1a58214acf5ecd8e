//! Bitmap font rasterizer
//!
//! Renders a symbol the way a text renderer sizes a single character:
//! draw it, crop to the ink bounding box, scale to the requested em size,
//! then pad with the configured margin.

use std::collections::BTreeMap;

use glyphmatch_core::{BACKGROUND, Error, FontId, Glyph, Rasterizer, RenderConfig, Result};
use tracing::trace;

use crate::font::BitmapFont;
use crate::scale::scale_by_sampling;

/// Intensity below which a pixel counts as ink when cropping.
const INK_THRESHOLD: u8 = 128;

/// Rasterizer over a registry of bitmap fonts
#[derive(Debug, Clone, Default)]
pub struct BitmapRasterizer {
    fonts: BTreeMap<FontId, BitmapFont>,
}

impl BitmapRasterizer {
    /// Create a rasterizer with no fonts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rasterizer with the built-in regular and bold fonts.
    pub fn with_builtin_fonts() -> Self {
        let mut r = Self::new();
        r.register(BitmapFont::builtin());
        r.register(BitmapFont::builtin_bold());
        r
    }

    /// Add or replace a font.
    pub fn register(&mut self, font: BitmapFont) {
        self.fonts.insert(font.id().clone(), font);
    }

    /// Look up a font.
    pub fn font(&self, id: &FontId) -> Option<&BitmapFont> {
        self.fonts.get(id)
    }

    /// Registered font identities.
    pub fn fonts(&self) -> impl Iterator<Item = &FontId> {
        self.fonts.keys()
    }
}

impl Rasterizer for BitmapRasterizer {
    fn render(&self, symbol: char, config: &RenderConfig) -> Result<Glyph> {
        config.validate()?;
        let font = self
            .fonts
            .get(&config.font)
            .ok_or_else(|| Error::FontNotFound(config.font.to_string()))?;
        let pattern = font
            .pattern(symbol)
            .ok_or_else(|| Error::UnsupportedSymbol {
                symbol,
                font: config.font.to_string(),
            })?;

        let dots = pattern.to_glyph()?.clip_to_foreground(INK_THRESHOLD)?;
        let factor = font.scale_for_size(config.size);
        let scaled = scale_by_sampling(&dots, factor, factor)?;
        let glyph = scaled
            .add_border(config.margin, BACKGROUND)?
            .with_source(symbol, config.clone());

        trace!(
            %symbol,
            width = glyph.width(),
            height = glyph.height(),
            "rendered glyph"
        );
        Ok(glyph)
    }
}
