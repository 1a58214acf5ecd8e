//! Rendering configuration
//!
//! A [`RenderConfig`] names everything that controls how a symbol is
//! rasterized: font identity, size and margin. Templates are built under
//! exactly one configuration; a different configuration means a new
//! template.

use crate::error::{Error, Result};
use std::fmt;

/// Default em size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 52;

/// Default background margin in pixels on every side.
pub const DEFAULT_MARGIN: u32 = 10;

/// Font identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(String);

impl FontId {
    /// Name of the built-in 5x7 bitmap font.
    pub const BUILTIN: &'static str = "builtin-5x7";

    /// Name of the built-in bold 5x7 bitmap font.
    pub const BUILTIN_BOLD: &'static str = "builtin-5x7-bold";

    /// Create a font identity from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The built-in regular font.
    pub fn builtin() -> Self {
        Self::new(Self::BUILTIN)
    }

    /// The built-in bold font.
    pub fn builtin_bold() -> Self {
        Self::new(Self::BUILTIN_BOLD)
    }

    /// Font name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters controlling rasterization of a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Font to render with
    pub font: FontId,
    /// Em size in pixels (default: 52)
    pub size: u32,
    /// Background margin on every side in pixels (default: 10)
    pub margin: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: FontId::builtin(),
            size: DEFAULT_FONT_SIZE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Set the em size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidParameter(
                "font size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}px+{}", self.font, self.size, self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.font, FontId::builtin());
        assert_eq!(config.size, 52);
        assert_eq!(config.margin, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .with_font(FontId::builtin_bold())
            .with_size(60)
            .with_margin(4);
        assert_eq!(config.font.as_str(), "builtin-5x7-bold");
        assert_eq!(config.size, 60);
        assert_eq!(config.margin, 4);
        assert_eq!(config.to_string(), "builtin-5x7-bold/60px+4");
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(RenderConfig::new().with_size(0).validate().is_err());
    }
}
