//! Template matching
//!
//! A query glyph is reduced to a [`FeatureVector`] and scored against every
//! template entry with [`closeness`]. Candidates are ranked by descending
//! score; equal scores keep alphabet order.

use glyphmatch_core::{Glyph, Rasterizer, RenderConfig};
use tracing::{debug, instrument, warn};

use crate::error::RecogResult;
use crate::features::{FeatureVector, extract_with};
use crate::template::Template;

/// Euclidean distance between two feature vectors
pub fn euclidean_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.distance(b)
}

/// Largest `f64` below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Similarity score `1 / (1 + distance)`
///
/// Lies in (0, 1], equals 1 exactly for identical vectors and strictly
/// decreases as distance grows. Distinct vectors never score 1, even when
/// their distance is lost to rounding.
pub fn closeness(a: &FeatureVector, b: &FeatureVector) -> f64 {
    if a == b {
        return 1.0;
    }
    (1.0 / (1.0 + euclidean_distance(a, b))).min(BELOW_ONE)
}

/// One ranked alphabet symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Alphabet symbol
    pub symbol: char,
    /// Closeness score in (0, 1]
    pub score: f64,
}

/// Ranked candidate list for one observed glyph
///
/// Holds every template symbol exactly once, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypothesis {
    features: FeatureVector,
    candidates: Vec<Candidate>,
}

impl Hypothesis {
    /// Features of the observed glyph.
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    /// All candidates, best first.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The top candidate.
    pub fn best(&self) -> &Candidate {
        // A template is never empty, so neither is a hypothesis.
        &self.candidates[0]
    }

    /// The predicted symbol.
    pub fn predicted(&self) -> char {
        self.best().symbol
    }

    /// The first `n` candidates (fewer if the alphabet is smaller).
    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    /// Score given to a symbol, if it is in the alphabet.
    pub fn score_of(&self, symbol: char) -> Option<f64> {
        self.candidates
            .iter()
            .find(|c| c.symbol == symbol)
            .map(|c| c.score)
    }

    /// Whether the top two candidates have exactly the same score.
    pub fn is_tied(&self) -> bool {
        matches!(self.candidates.as_slice(), [a, b, ..] if a.score == b.score)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a hypothesis produced by a template.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Rank template symbols against precomputed features
pub fn classify_features(features: &FeatureVector, template: &Template) -> Hypothesis {
    let mut candidates: Vec<Candidate> = template
        .iter()
        .map(|entry| Candidate {
            symbol: entry.symbol,
            score: closeness(features, &entry.features),
        })
        .collect();

    // Stable sort: equal scores stay in alphabet order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let hypothesis = Hypothesis {
        features: *features,
        candidates,
    };
    if hypothesis.is_tied() {
        let best = hypothesis.best();
        warn!(
            symbol = %best.symbol,
            score = best.score,
            "top candidates tied; resolved by alphabet order"
        );
    }
    hypothesis
}

/// Classify an already rendered glyph
///
/// Features are extracted with the template's own options.
pub fn classify_glyph(glyph: &Glyph, template: &Template) -> Hypothesis {
    let features = extract_with(glyph, template.options());
    classify_features(&features, template)
}

/// Render `symbol` under the template's configuration and classify it
pub fn classify<R>(symbol: char, template: &Template, rasterizer: &R) -> RecogResult<Hypothesis>
where
    R: Rasterizer + ?Sized,
{
    let glyph = rasterizer.render(symbol, template.config())?;
    Ok(classify_glyph(&glyph, template))
}

/// Hypotheses for a symbol sequence plus the top-1 string
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    hypotheses: Vec<Hypothesis>,
    predicted: String,
}

impl ClassificationResult {
    /// Build from hypotheses in input order.
    pub fn from_hypotheses(hypotheses: Vec<Hypothesis>) -> Self {
        let predicted = hypotheses.iter().map(Hypothesis::predicted).collect();
        Self {
            hypotheses,
            predicted,
        }
    }

    /// Concatenated top-1 predictions.
    pub fn predicted(&self) -> &str {
        &self.predicted
    }

    /// Per-position hypotheses, in input order.
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Number of classified symbols.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Whether the input was empty.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}

/// Classify each symbol of `symbols`, rendered under the template's configuration
///
/// Positions are independent; there is no context between symbols.
pub fn classify_sequence<R>(
    symbols: &str,
    template: &Template,
    rasterizer: &R,
) -> RecogResult<ClassificationResult>
where
    R: Rasterizer + ?Sized,
{
    classify_sequence_with(symbols, template, rasterizer, template.config())
}

/// Classify each symbol of `symbols`, rendered under `query_config`
///
/// Lets the observed text come from a different rendering than the
/// template, for robustness measurements.
#[instrument(skip_all, fields(len = symbols.chars().count(), query = %query_config))]
pub fn classify_sequence_with<R>(
    symbols: &str,
    template: &Template,
    rasterizer: &R,
    query_config: &RenderConfig,
) -> RecogResult<ClassificationResult>
where
    R: Rasterizer + ?Sized,
{
    let hypotheses = symbols
        .chars()
        .map(|symbol| -> RecogResult<Hypothesis> {
            let glyph = rasterizer.render(symbol, query_config)?;
            let hypothesis = classify_glyph(&glyph, template);
            debug!(
                input = %symbol,
                predicted = %hypothesis.predicted(),
                score = hypothesis.best().score,
                "classified"
            );
            Ok(hypothesis)
        })
        .collect::<RecogResult<Vec<_>>>()?;

    Ok(ClassificationResult::from_hypotheses(hypotheses))
}
