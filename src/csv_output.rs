//! CSV output format for Benford analysis reports
//!
//! One row per domain value, ascending by digit, for spreadsheet analysis.

use crate::analysis::{BenfordAnalysis, DigitRow};

const HEADER: &str = "digit,observed,expected,probability";

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<DigitRow>,
}

impl CsvOutput {
    /// Create an empty CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter pre-filled with every row of `analysis`
    pub fn from_analysis(analysis: &BenfordAnalysis) -> Self {
        let mut output = Self::new();
        for row in analysis.rows() {
            output.add_row(row);
        }
        output
    }

    /// Add a digit row to the output
    pub fn add_row(&mut self, row: DigitRow) {
        self.rows.push(row);
    }

    /// Format a digit row as CSV
    fn format_row(row: &DigitRow) -> String {
        format!(
            "{},{},{},{}",
            row.digit, row.observed, row.expected, row.probability
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(HEADER);
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}
