//! glyphmatch-render - Deterministic symbol rasterization
//!
//! This crate supplies a [`Rasterizer`](glyphmatch_core::Rasterizer)
//! implementation backed by bitmap fonts, so templates and queries can be
//! produced without any font files:
//!
//! - [`font`]: Dot-matrix fonts, including the built-in 5x7 regular and bold faces
//! - [`scale`]: Nearest-neighbour glyph scaling
//! - [`png`]: Grayscale PNG export and import
//! - [`BitmapRasterizer`]: Font registry that renders symbols under a `RenderConfig`
//!
//! # Quick Start
//!
//! ```
//! use glyphmatch_core::{Rasterizer, RenderConfig};
//! use glyphmatch_render::BitmapRasterizer;
//!
//! let rasterizer = BitmapRasterizer::with_builtin_fonts();
//! let glyph = rasterizer.render('A', &RenderConfig::default()).unwrap();
//! assert!(glyph.width() > 20);
//! ```

pub mod font;
pub mod png;
mod rasterizer;
pub mod scale;

pub use font::{BitmapFont, DotPattern};
pub use crate::png::{read_png, write_png};
pub use rasterizer::BitmapRasterizer;

// Re-export core for convenience
pub use glyphmatch_core;
