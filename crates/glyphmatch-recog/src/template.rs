//! Reference templates
//!
//! A [`Template`] holds one [`FeatureVector`] per alphabet symbol, all
//! extracted from glyphs rendered under a single [`RenderConfig`]. The
//! alphabet order is kept; it is the tie-break order for ranking.
//!
//! Templates are never updated in place. A new configuration means a new
//! template.

use std::collections::HashSet;

use glyphmatch_core::{Rasterizer, RenderConfig};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::{RecogError, RecogResult};
use crate::features::{FeatureOptions, FeatureVector, extract_with};

/// One alphabet symbol and its reference features
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateEntry {
    /// Alphabet symbol
    pub symbol: char,
    /// Features of the symbol's reference glyph
    pub features: FeatureVector,
}

/// Ordered mapping from alphabet symbol to reference features
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    config: RenderConfig,
    options: FeatureOptions,
    entries: Vec<TemplateEntry>,
}

impl Template {
    /// Build a template with default feature options
    ///
    /// # Errors
    ///
    /// - [`RecogError::EmptyAlphabet`] if `alphabet` is empty
    /// - [`RecogError::DuplicateSymbol`] if a symbol repeats
    /// - [`RecogError::Core`] if the rasterizer fails for any symbol
    pub fn build<R>(alphabet: &[char], config: &RenderConfig, rasterizer: &R) -> RecogResult<Self>
    where
        R: Rasterizer + ?Sized,
    {
        Self::build_with(alphabet, config, rasterizer, &FeatureOptions::default())
    }

    /// Build a template with explicit feature options
    ///
    /// Symbols are rendered and measured in parallel; the entries keep
    /// alphabet order regardless of completion order.
    #[instrument(skip_all, fields(symbols = alphabet.len(), config = %config))]
    pub fn build_with<R>(
        alphabet: &[char],
        config: &RenderConfig,
        rasterizer: &R,
        options: &FeatureOptions,
    ) -> RecogResult<Self>
    where
        R: Rasterizer + ?Sized,
    {
        validate_alphabet(alphabet)?;
        options.validate()?;

        let entries = alphabet
            .par_iter()
            .map(|&symbol| -> RecogResult<TemplateEntry> {
                let glyph = rasterizer.render(symbol, config)?;
                Ok(TemplateEntry {
                    symbol,
                    features: extract_with(&glyph, options),
                })
            })
            .collect::<RecogResult<Vec<_>>>()?;

        debug!(entries = entries.len(), "template built");
        Ok(Self {
            config: config.clone(),
            options: *options,
            entries,
        })
    }

    /// Rendering configuration the template was built under.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Feature options the template was built with.
    pub fn options(&self) -> &FeatureOptions {
        &self.options
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a successfully built template.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter()
    }

    /// Symbols in alphabet order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|e| e.symbol)
    }

    /// Alphabet position of a symbol.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.entries.iter().position(|e| e.symbol == symbol)
    }

    /// Reference features of a symbol.
    pub fn get(&self, symbol: char) -> Option<&FeatureVector> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| &e.features)
    }
}

/// Build a template with default feature options
///
/// See [`Template::build`].
pub fn build_template<R>(
    alphabet: &[char],
    config: &RenderConfig,
    rasterizer: &R,
) -> RecogResult<Template>
where
    R: Rasterizer + ?Sized,
{
    Template::build(alphabet, config, rasterizer)
}

/// Check that an alphabet is non-empty and free of repeats
pub fn validate_alphabet(alphabet: &[char]) -> RecogResult<()> {
    if alphabet.is_empty() {
        return Err(RecogError::EmptyAlphabet);
    }
    let mut seen = HashSet::with_capacity(alphabet.len());
    for &symbol in alphabet {
        if !seen.insert(symbol) {
            return Err(RecogError::DuplicateSymbol(symbol));
        }
    }
    Ok(())
}
