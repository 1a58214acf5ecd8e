//! glyphmatch-recog - Template-based character classification
//!
//! This crate implements the classification pipeline:
//!
//! - **Feature extraction**: Reduce a glyph to mass, centroid and second moments
//! - **Templates**: One reference feature vector per alphabet symbol
//! - **Classification**: Rank alphabet symbols by closeness to an observed glyph
//! - **Evaluation**: Accuracy against ground truth, and sensitivity to rendering changes
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphmatch_core::{Rasterizer, RenderConfig};
//! use glyphmatch_recog::{Template, classify_sequence, evaluate};
//!
//! fn run(rasterizer: &impl Rasterizer) -> glyphmatch_recog::RecogResult<()> {
//!     let config = RenderConfig::default();
//!     let template = Template::build(&['A', 'B', 'C'], &config, rasterizer)?;
//!     let result = classify_sequence("CAB", &template, rasterizer)?;
//!     let report = evaluate(result.predicted(), "CAB")?;
//!     println!("accuracy: {:.2}%", report.accuracy());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`features`]: Feature vectors and extraction
//! - [`template`]: Template construction
//! - [`classify`]: Closeness measure and ranking
//! - [`evaluate`]: Accuracy reports and experiments

pub mod classify;
mod error;
pub mod evaluate;
pub mod features;
pub mod template;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use classify::{
    Candidate, ClassificationResult, Hypothesis, classify, classify_features, classify_glyph,
    classify_sequence, classify_sequence_with, closeness, euclidean_distance,
};
pub use evaluate::{
    EvaluationReport, ExperimentReport, ExperimentRun, evaluate, run_experiment,
    run_experiment_detailed, run_transfer_experiment,
};
pub use features::{FeatureOptions, FeatureVector, extract, extract_with};
pub use template::{Template, TemplateEntry, build_template};

// Re-export core for convenience
pub use glyphmatch_core;
