//! Glyphmatch - Template-based character classification
//!
//! Builds a reference feature vector for every symbol of an alphabet,
//! classifies observed glyphs by closeness to those references, and
//! measures accuracy, including how accuracy shifts when the rendering
//! configuration changes.
//!
//! # Overview
//!
//! - Glyph bitmaps and rendering configuration ([`Glyph`], [`RenderConfig`])
//! - Built-in bitmap font rasterizer ([`render`])
//! - Features, templates, ranking and evaluation ([`recog`])
//! - Markdown experiment reports ([`report`])
//!
//! # Example
//!
//! ```
//! use glyphmatch::recog::run_experiment;
//! use glyphmatch::render::BitmapRasterizer;
//! use glyphmatch::RenderConfig;
//!
//! let rasterizer = BitmapRasterizer::with_builtin_fonts();
//! let config_a = RenderConfig::default();
//! let config_b = RenderConfig::default().with_size(60);
//! let (a, b) = run_experiment(&['A', 'B', 'C'], "ABC", &rasterizer, &config_a, &config_b).unwrap();
//! assert_eq!(a.accuracy(), 100.0);
//! assert_eq!(b.predicted().chars().count(), 3);
//! ```

pub mod report;

// Re-export core types (primary data structures used everywhere)
pub use glyphmatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphmatch_recog as recog;
pub use glyphmatch_render as render;
