//! Human-readable text report with an ASCII chart
//!
//! Observed counts are drawn as `#` bars; the expected count for each digit
//! is marked with `|` on the same scale.

use crate::analysis::BenfordAnalysis;
use crate::config::ReportConfig;
use std::fmt::Write;

pub const FIT_MESSAGE: &str = "Observed distribution matches expected distribution.";
pub const NO_FIT_MESSAGE: &str = "Observed distribution does not match expected.";

/// Report title shared by the text and HTML formats
pub fn title(analysis: &BenfordAnalysis, source: &str) -> String {
    format!(
        "{} - Benford's Distribution of {} Digits",
        source,
        analysis.mode.label()
    )
}

/// Verdict sentence for a result
pub fn verdict_message(analysis: &BenfordAnalysis) -> &'static str {
    if analysis.result.is_fit {
        FIT_MESSAGE
    } else {
        NO_FIT_MESSAGE
    }
}

/// Text report formatter
#[derive(Debug)]
pub struct TextReport<'a> {
    analysis: &'a BenfordAnalysis,
    source: &'a str,
    config: &'a ReportConfig,
}

impl<'a> TextReport<'a> {
    pub fn new(analysis: &'a BenfordAnalysis, source: &'a str, config: &'a ReportConfig) -> Self {
        Self {
            analysis,
            source,
            config,
        }
    }

    fn observed_list(&self) -> String {
        let counts: Vec<String> = self
            .analysis
            .observed
            .iter()
            .map(|(_, c)| c.to_string())
            .collect();
        format!("[{}]", counts.join(", "))
    }

    fn expected_list(&self) -> String {
        let precision = self.config.precision;
        let counts: Vec<String> = self
            .analysis
            .expected
            .iter()
            .map(|(_, e)| format!("{:.*}", precision, e))
            .collect();
        format!("[{}]", counts.join(", "))
    }

    /// One chart line: `#` up to the observed count, `|` at the expected count
    fn bar(observed: u64, expected: f64, scale: f64, width: usize) -> String {
        let to_cells = |value: f64| ((value / scale) * width as f64).round() as usize;

        let filled = to_cells(observed as f64).min(width);
        let marker = to_cells(expected).min(width);

        let mut cells = vec![' '; width + 1];
        cells[..filled].fill('#');
        cells[marker] = '|';

        let line: String = cells.into_iter().collect();
        line.trim_end().to_string()
    }

    fn chart(&self) -> String {
        let width = self.config.chart_width;
        let scale = (self.analysis.observed.max() as f64)
            .max(self.analysis.expected.max())
            .max(1.0);
        let precision = self.config.precision;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>5}  {:>9}  {:>10}  chart (# observed, | expected)",
            "digit", "observed", "expected"
        );
        for row in self.analysis.rows() {
            let _ = writeln!(
                out,
                "{:>5}  {:>9}  {:>10.*}  {}",
                row.digit,
                row.observed,
                precision,
                row.expected,
                Self::bar(row.observed, row.expected, scale, width)
            );
        }
        out
    }

    fn annotation(&self) -> String {
        let result = &self.analysis.result;
        format!(
            "dof={}\nChi2={:.*}\nCritical Value={}\nalpha={}\n",
            result.degrees_of_freedom,
            self.config.precision,
            result.statistic,
            result.critical_value,
            result.significance_level
        )
    }

    /// Render the complete report
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}\n", title(self.analysis, self.source));
        let _ = writeln!(
            out,
            "observations = {} ({} rejected)\n",
            self.analysis.total, self.analysis.rejected
        );
        let _ = writeln!(out, "observed counts = {}\n", self.observed_list());
        let _ = writeln!(out, "expected counts = {}\n", self.expected_list());

        if self.config.show_chart {
            out.push_str(&self.chart());
            out.push('\n');
        }

        out.push_str(&self.annotation());
        out.push('\n');
        out.push_str(verdict_message(self.analysis));
        out.push('\n');

        out
    }
}
