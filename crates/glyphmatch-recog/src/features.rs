//! Feature extraction
//!
//! Reduces a glyph to five numbers describing its ink:
//!
//! | Component | Meaning | Range |
//! |---|---|---|
//! | `mass_norm` | fraction of ink pixels | [0, 1] |
//! | `center_x`, `center_y` | ink centroid over width/height | [0, 1] |
//! | `moment_x`, `moment_y` | population second central moment of normalized coordinates | >= 0 |
//!
//! A glyph with no ink maps to the zero vector. That is a value, not an error.

use glyphmatch_core::Glyph;

use crate::error::{RecogError, RecogResult};

/// Default ink threshold: pixels darker than this are foreground.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Number of components in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 5;

/// Options for feature extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureOptions {
    /// Intensity below which a pixel is foreground (default: 128)
    pub threshold: u8,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FeatureOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.threshold == 0 {
            return Err(RecogError::InvalidParameter(
                "threshold must be positive, otherwise no pixel can be foreground".to_string(),
            ));
        }
        Ok(())
    }
}

/// Five-component descriptor of a glyph's ink
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    mass_norm: f64,
    center_x: f64,
    center_y: f64,
    moment_x: f64,
    moment_y: f64,
}

impl FeatureVector {
    /// The all-zero vector, assigned to glyphs without ink.
    pub const ZERO: FeatureVector = FeatureVector {
        mass_norm: 0.0,
        center_x: 0.0,
        center_y: 0.0,
        moment_x: 0.0,
        moment_y: 0.0,
    };

    /// Build a vector from components in
    /// `[mass_norm, center_x, center_y, moment_x, moment_y]` order.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if a component is not
    /// finite or lies outside its range.
    pub fn new(components: [f64; FEATURE_COUNT]) -> RecogResult<Self> {
        let [mass_norm, center_x, center_y, moment_x, moment_y] = components;
        let v = Self {
            mass_norm,
            center_x,
            center_y,
            moment_x,
            moment_y,
        };
        if !v.is_valid() {
            return Err(RecogError::InvalidParameter(format!(
                "feature components out of range: {components:?}"
            )));
        }
        Ok(v)
    }

    /// Fraction of pixels that are ink.
    pub fn mass_norm(&self) -> f64 {
        self.mass_norm
    }

    /// Horizontal ink centroid divided by width.
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Vertical ink centroid divided by height.
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Horizontal second central moment.
    pub fn moment_x(&self) -> f64 {
        self.moment_x
    }

    /// Vertical second central moment.
    pub fn moment_y(&self) -> f64 {
        self.moment_y
    }

    /// Components as an array.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.mass_norm,
            self.center_x,
            self.center_y,
            self.moment_x,
            self.moment_y,
        ]
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether every component is finite and within its range.
    pub fn is_valid(&self) -> bool {
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        self.as_array().iter().all(|v| v.is_finite())
            && unit(self.mass_norm)
            && unit(self.center_x)
            && unit(self.center_y)
            && self.moment_x >= 0.0
            && self.moment_y >= 0.0
    }

    /// Euclidean distance to another vector.
    pub fn distance(&self, other: &FeatureVector) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// Extract features with the default threshold
pub fn extract(glyph: &Glyph) -> FeatureVector {
    extract_with(glyph, &FeatureOptions::default())
}

/// Extract features with explicit options
///
/// Pure: the same bitmap and options always give the same vector.
pub fn extract_with(glyph: &Glyph, options: &FeatureOptions) -> FeatureVector {
    let w = glyph.width() as f64;
    let h = glyph.height() as f64;
    let threshold = options.threshold;

    let mut count = 0u64;
    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    for (y, row) in glyph.rows().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|(_, v)| **v < threshold) {
            count += 1;
            sum_x += x as u64;
            sum_y += y as u64;
        }
    }

    if count == 0 {
        return FeatureVector::ZERO;
    }

    let n = count as f64;
    let center_x = sum_x as f64 / n / w;
    let center_y = sum_y as f64 / n / h;

    let mut acc_x = 0.0f64;
    let mut acc_y = 0.0f64;
    for (y, row) in glyph.rows().enumerate() {
        let dy = y as f64 / h - center_y;
        for (x, _) in row.iter().enumerate().filter(|(_, v)| **v < threshold) {
            let dx = x as f64 / w - center_x;
            acc_x += dx * dx;
            acc_y += dy * dy;
        }
    }

    FeatureVector {
        mass_norm: n / (w * h),
        center_x,
        center_y,
        moment_x: acc_x / n,
        moment_y: acc_y / n,
    }
}
