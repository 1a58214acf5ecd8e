//! Accuracy evaluation and rendering-sensitivity experiments

use std::fmt;

use glyphmatch_core::{Rasterizer, RenderConfig};
use tracing::{info, instrument};

use crate::classify::{ClassificationResult, classify_sequence_with};
use crate::error::{RecogError, RecogResult};
use crate::template::Template;

/// Position-by-position comparison of a prediction with ground truth
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    predicted: String,
    ground_truth: String,
    matches: Vec<bool>,
    accuracy: f64,
}

impl EvaluationReport {
    /// Predicted string.
    pub fn predicted(&self) -> &str {
        &self.predicted
    }

    /// Ground-truth string.
    pub fn ground_truth(&self) -> &str {
        &self.ground_truth
    }

    /// Per-position match flags.
    pub fn matches(&self) -> &[bool] {
        &self.matches
    }

    /// Percentage of matching positions, 0 to 100.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Number of matching positions.
    pub fn match_count(&self) -> usize {
        self.matches.iter().filter(|&&m| m).count()
    }

    /// Number of mismatching positions.
    pub fn error_count(&self) -> usize {
        self.matches.len() - self.match_count()
    }

    /// Number of compared positions.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing was compared.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {}/{} correct ({:.2}%)",
            self.predicted,
            self.ground_truth,
            self.match_count(),
            self.len(),
            self.accuracy
        )
    }
}

/// Compare a prediction with ground truth, symbol by symbol
///
/// Lengths are counted in `char`s. An empty pair scores 100%.
///
/// # Errors
///
/// Returns [`RecogError::LengthMismatch`] if the lengths differ.
pub fn evaluate(predicted: &str, ground_truth: &str) -> RecogResult<EvaluationReport> {
    let p_len = predicted.chars().count();
    let g_len = ground_truth.chars().count();
    if p_len != g_len {
        return Err(RecogError::LengthMismatch {
            predicted: p_len,
            ground_truth: g_len,
        });
    }

    let matches: Vec<bool> = predicted
        .chars()
        .zip(ground_truth.chars())
        .map(|(p, g)| p == g)
        .collect();
    let hits = matches.iter().filter(|&&m| m).count();
    let accuracy = if g_len == 0 {
        100.0
    } else {
        100.0 * hits as f64 / g_len as f64
    };

    Ok(EvaluationReport {
        predicted: predicted.to_string(),
        ground_truth: ground_truth.to_string(),
        matches,
        accuracy,
    })
}

/// One classification pass: a template configuration, a query
/// configuration, and what came out
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRun {
    /// Configuration the template was built under
    pub template_config: RenderConfig,
    /// Configuration the observed symbols were rendered under
    pub query_config: RenderConfig,
    /// Hypotheses and predicted string
    pub classification: ClassificationResult,
    /// Accuracy against ground truth
    pub evaluation: EvaluationReport,
}

/// Baseline and alternate runs over the same ground truth
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    /// Text that was classified
    pub ground_truth: String,
    /// Run under the first configuration
    pub baseline: ExperimentRun,
    /// Run under the second configuration
    pub alternate: ExperimentRun,
}

impl ExperimentReport {
    /// Alternate accuracy minus baseline accuracy, in percentage points.
    pub fn accuracy_delta(&self) -> f64 {
        self.alternate.evaluation.accuracy() - self.baseline.evaluation.accuracy()
    }
}

/// Build a template under `template_config`, then classify `ground_truth`
/// rendered under `query_config`
///
/// # Errors
///
/// Any template build, rasterization or evaluation error.
#[instrument(skip_all, fields(template = %template_config, query = %query_config))]
pub fn run_transfer_experiment<R>(
    alphabet: &[char],
    ground_truth: &str,
    rasterizer: &R,
    template_config: &RenderConfig,
    query_config: &RenderConfig,
) -> RecogResult<ExperimentRun>
where
    R: Rasterizer + ?Sized,
{
    let template = Template::build(alphabet, template_config, rasterizer)?;
    let classification = classify_sequence_with(ground_truth, &template, rasterizer, query_config)?;
    let evaluation = evaluate(classification.predicted(), ground_truth)?;
    info!(
        predicted = classification.predicted(),
        accuracy = evaluation.accuracy(),
        "experiment run finished"
    );
    Ok(ExperimentRun {
        template_config: template_config.clone(),
        query_config: query_config.clone(),
        classification,
        evaluation,
    })
}

/// Run the full pipeline under two configurations and keep everything
///
/// Each configuration gets its own template; queries are rendered with
/// the same configuration as their template.
pub fn run_experiment_detailed<R>(
    alphabet: &[char],
    ground_truth: &str,
    rasterizer: &R,
    config_a: &RenderConfig,
    config_b: &RenderConfig,
) -> RecogResult<ExperimentReport>
where
    R: Rasterizer + ?Sized,
{
    let baseline = run_transfer_experiment(alphabet, ground_truth, rasterizer, config_a, config_a)?;
    let alternate =
        run_transfer_experiment(alphabet, ground_truth, rasterizer, config_b, config_b)?;
    Ok(ExperimentReport {
        ground_truth: ground_truth.to_string(),
        baseline,
        alternate,
    })
}

/// Measure how accuracy changes between two rendering configurations
///
/// Returns the evaluation under `config_a` and under `config_b`.
pub fn run_experiment<R>(
    alphabet: &[char],
    ground_truth: &str,
    rasterizer: &R,
    config_a: &RenderConfig,
    config_b: &RenderConfig,
) -> RecogResult<(EvaluationReport, EvaluationReport)>
where
    R: Rasterizer + ?Sized,
{
    let report = run_experiment_detailed(alphabet, ground_truth, rasterizer, config_a, config_b)?;
    Ok((report.baseline.evaluation, report.alternate.evaluation))
}
