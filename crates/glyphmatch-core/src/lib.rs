//! Glyphmatch Core - Basic data structures for glyph recognition
//!
//! This crate provides the fundamental types shared by the rest of the
//! workspace:
//!
//! - [`Glyph`] / [`GlyphMut`] - Single-symbol grayscale bitmap (immutable / mutable)
//! - [`RenderConfig`] / [`FontId`] - Rendering parameters
//! - [`Rasterizer`] - Interface to whatever draws symbols into glyphs

pub mod config;
pub mod error;
pub mod glyph;
pub mod rasterizer;

pub use config::{DEFAULT_FONT_SIZE, DEFAULT_MARGIN, FontId, RenderConfig};
pub use error::{Error, Result};
pub use glyph::{BACKGROUND, Glyph, GlyphMut, GlyphSource, INK, MAX_GLYPH_PIXELS, checked_area};
pub use rasterizer::Rasterizer;
