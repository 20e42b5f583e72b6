//! JSON output format for Benford analysis reports

use crate::analysis::{BenfordAnalysis, DigitRow};
use crate::chi_squared::ChiSquaredResult;
use serde::{Deserialize, Serialize};

/// A single digit row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDigit {
    pub digit: u16,
    pub observed: u64,
    pub expected: f64,
    /// Benford probability of the digit
    pub probability: f64,
}

impl From<DigitRow> for JsonDigit {
    fn from(row: DigitRow) -> Self {
        Self {
            digit: row.digit,
            observed: row.observed,
            expected: row.expected,
            probability: row.probability,
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// Dataset the analysis was run on
    pub source: String,
    /// Mode selector ("1", "2", "3", "12", "123")
    pub mode: String,
    /// Mode label ("First", "First Two", ...)
    pub label: String,
    /// Observations included in the analysis
    pub total: u64,
    /// Tokens rejected for having too few significant digits
    pub rejected: usize,
    /// Per-digit comparison, ascending by digit
    pub digits: Vec<JsonDigit>,
    pub chi_squared: ChiSquaredResult,
}

impl JsonReport {
    pub fn new(analysis: &BenfordAnalysis, source: &str) -> Self {
        Self {
            source: source.to_string(),
            mode: analysis.mode.selector().to_string(),
            label: analysis.mode.label().to_string(),
            total: analysis.total,
            rejected: analysis.rejected,
            digits: analysis.rows().into_iter().map(JsonDigit::from).collect(),
            chi_squared: analysis.result,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
