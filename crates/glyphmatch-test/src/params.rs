//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use glyphmatch_core::Glyph;
use glyphmatch_render::write_png;
use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values only (default)
    #[default]
    Compare,
    /// Compare, print detail, and write text artifacts
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, the mode and
/// every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "features")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is read from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares equal, even with itself
        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two glyphs for identical dimensions and pixels
    pub fn compare_glyphs(&mut self, glyph1: &Glyph, glyph2: &Glyph) -> bool {
        self.index += 1;

        if glyph1.width() != glyph2.width() || glyph1.height() != glyph2.height() {
            let msg = format!(
                "Failure in {}_reg: glyph comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                glyph1.width(),
                glyph1.height(),
                glyph2.width(),
                glyph2.height()
            );
            self.fail(msg);
            return false;
        }

        let first_diff = glyph1
            .data()
            .iter()
            .zip(glyph2.data())
            .position(|(a, b)| a != b);
        if let Some(offset) = first_diff {
            let w = glyph1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: glyph comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                offset % w,
                offset / w
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Write a text artifact to the regout directory in display mode
    ///
    /// # Returns
    ///
    /// The written path, or `None` outside display mode.
    pub fn write_text(&mut self, text: &str, ext: &str) -> TestResult<Option<PathBuf>> {
        self.index += 1;
        if !self.display() {
            return Ok(None);
        }

        let path = self.regout_path(ext)?;
        fs::write(&path, text)?;
        eprintln!("Wrote: {}", path.display());
        Ok(Some(path))
    }

    /// Write a glyph as PNG to the regout directory in display mode
    ///
    /// # Returns
    ///
    /// The written path, or `None` outside display mode.
    pub fn write_glyph(&mut self, glyph: &Glyph) -> TestResult<Option<PathBuf>> {
        self.index += 1;
        if !self.display() {
            return Ok(None);
        }

        let path = self.regout_path("png")?;
        let file = fs::File::create(&path)?;
        write_png(glyph, BufWriter::new(file)).map_err(|e| TestError::ImageWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path.display());
        Ok(Some(path))
    }

    fn regout_path(&self, ext: &str) -> TestResult<PathBuf> {
        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        Ok(PathBuf::from(format!(
            "{}/{}.{:02}.{}",
            dir, self.test_name, self.index, ext
        )))
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings("ABC", "ABC"));
        assert!(!rp.compare_strings("ABC", "ABD"));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_glyphs() {
        let mut rp = RegParams::new("test");
        let a = Glyph::new(3, 3).unwrap();
        let mut b = a.to_mut();
        b.set_pixel(1, 2, 0).unwrap();
        let b: Glyph = b.into();
        assert!(rp.compare_glyphs(&a, &a.clone()));
        assert!(!rp.compare_glyphs(&a, &b));
        assert!(rp.failures()[0].contains("(1, 2)"));
        assert!(!rp.compare_glyphs(&a, &Glyph::new(3, 4).unwrap()));
    }

    #[test]
    fn test_writes_skipped_outside_display_mode() {
        let mut rp = RegParams::new("test");
        rp.mode = RegTestMode::Compare;
        let glyph = Glyph::new(2, 2).unwrap();
        assert!(rp.write_glyph(&glyph).unwrap().is_none());
        assert!(rp.write_text("x", "txt").unwrap().is_none());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_check() {
        let mut rp = RegParams::new("test");
        assert!(rp.check(true, "ok"));
        assert!(!rp.check(false, "broken"));
        assert!(rp.failures()[0].contains("broken"));
    }
}
