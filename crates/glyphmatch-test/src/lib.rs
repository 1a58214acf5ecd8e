//! glyphmatch-test - Regression test harness for glyphmatch
//!
//! Each regression test creates a [`RegParams`], records numbered
//! comparisons, and asserts on [`RegParams::cleanup`] at the end. Failures
//! are collected rather than panicking at the first one, so a single run
//! reports every mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use glyphmatch_test::RegParams;
//!
//! let mut rp = RegParams::new("features");
//! rp.compare_values(0.25, fv.center_x(), 1e-9);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print extra detail and write
//!   text and PNG artifacts under `tests/regout`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use glyphmatch_core::{FontId, RenderConfig};
use glyphmatch_render::BitmapRasterizer;

/// Uppercase Latin alphabet in canonical order.
pub const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Decimal digits in canonical order.
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Rasterizer with the built-in regular and bold fonts.
pub fn builtin_rasterizer() -> BitmapRasterizer {
    BitmapRasterizer::with_builtin_fonts()
}

/// Default configuration with the given em size.
pub fn config_with_size(size: u32) -> RenderConfig {
    RenderConfig::default().with_size(size)
}

/// Bold configuration with the given em size.
pub fn bold_config_with_size(size: u32) -> RenderConfig {
    RenderConfig::default()
        .with_font(FontId::builtin_bold())
        .with_size(size)
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphmatch-test is at crates/glyphmatch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
