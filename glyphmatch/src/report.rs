//! Markdown experiment reports
//!
//! Formats an [`ExperimentReport`] as a Markdown document: the source
//! text, the recognized text and accuracy, the top-ranked candidates for
//! every position, and the same summary for the alternate configuration.
//! Writing the document anywhere is up to the caller.

use std::fmt;

use glyphmatch_recog::{ExperimentReport, ExperimentRun, Hypothesis};

/// Number of candidates listed per position by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Markdown view of an experiment
#[derive(Debug, Clone, Copy)]
pub struct MarkdownReport<'a> {
    report: &'a ExperimentReport,
    top_n: usize,
}

impl<'a> MarkdownReport<'a> {
    /// Wrap a report, listing `top_n` candidates per position.
    pub fn new(report: &'a ExperimentReport, top_n: usize) -> Self {
        Self { report, top_n }
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let baseline = &self.report.baseline;
        let alternate = &self.report.alternate;

        writeln!(f, "# Template classification")?;
        writeln!(f)?;
        writeln!(f, "Configuration: `{}`", baseline.template_config)?;
        writeln!(f)?;
        writeln!(f, "## Source: `{}`", self.report.ground_truth)?;
        writeln!(f, "## Recognized: `{}`", baseline.evaluation.predicted())?;
        writeln!(f, "## Accuracy: {:.2}%", baseline.evaluation.accuracy())?;
        writeln!(f)?;

        writeln!(f, "## Hypotheses")?;
        for (i, hypothesis) in baseline.classification.hypotheses().iter().enumerate() {
            writeln!(f, "{}: {}", i + 1, CandidateList(hypothesis, self.top_n))?;
        }
        writeln!(f)?;

        write_alternate(f, alternate)
    }
}

fn write_alternate(f: &mut fmt::Formatter<'_>, run: &ExperimentRun) -> fmt::Result {
    writeln!(f, "## Alternate configuration")?;
    writeln!(f, "Font: {}", run.template_config.font)?;
    writeln!(f, "Font size: {}", run.template_config.size)?;
    if run.query_config != run.template_config {
        writeln!(f, "Query configuration: `{}`", run.query_config)?;
    }
    writeln!(f, "Recognized: {}", run.evaluation.predicted())?;
    writeln!(f, "Accuracy: {:.2}%", run.evaluation.accuracy())
}

struct CandidateList<'a>(&'a Hypothesis, usize);

impl fmt::Display for CandidateList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.top(self.1).iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "('{}', {:.4})", c.symbol, c.score)?;
        }
        write!(f, "]")
    }
}

/// Render an experiment as Markdown, listing `top_n` candidates per position
pub fn render_markdown(report: &ExperimentReport, top_n: usize) -> String {
    MarkdownReport::new(report, top_n).to_string()
}
