//! End-to-end Benford analysis of a tokenised dataset
//!
//! tokens → [`extract_all`] → [`DigitCount`] → [`ExpectedCount`] (scaled
//! [`ProbabilityTable`]) → [`goodness_of_fit`]

use crate::benford_model::ProbabilityTable;
use crate::chi_squared::{goodness_of_fit, ChiSquaredResult};
use crate::error::{BenfordError, Result};
use crate::extract::extract_all;
use crate::frequency::{DigitCount, ExpectedCount};
use crate::mode::Mode;
use serde::Serialize;

/// Share of rejected tokens above which a warning is logged
const REJECTION_WARN_RATIO: f64 = 0.5;

/// Expected counts below this make the chi-squared approximation unreliable
const MIN_EXPECTED_COUNT: f64 = 5.0;

/// One row of the per-digit comparison, for presenters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DigitRow {
    pub digit: u16,
    pub observed: u64,
    pub expected: f64,
    pub probability: f64,
}

/// Complete result of a Benford analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenfordAnalysis {
    pub mode: Mode,
    /// Number of observations that yielded a digit value (N)
    pub total: u64,
    /// Number of tokens dropped for having too few significant digits
    pub rejected: usize,
    pub observed: DigitCount,
    pub expected: ExpectedCount,
    pub result: ChiSquaredResult,
}

impl BenfordAnalysis {
    /// Per-digit rows in ascending digit order
    pub fn rows(&self) -> Vec<DigitRow> {
        let table = ProbabilityTable::cached(self.mode);
        self.observed
            .iter()
            .zip(self.expected.iter())
            .map(|((digit, observed), (_, expected))| DigitRow {
                digit,
                observed,
                expected,
                probability: table.get(digit).unwrap_or_default(),
            })
            .collect()
    }

    /// Smallest expected count across the domain
    pub fn min_expected(&self) -> f64 {
        self.expected
            .iter()
            .map(|(_, e)| e)
            .fold(f64::INFINITY, f64::min)
    }
}

/// Analyse raw observation tokens against Benford's Law for `mode`
///
/// # Errors
/// - [`BenfordError::EmptyDataset`] when no token yields a digit value
/// - [`BenfordError::DegenerateExpectedValue`] if an expected count is zero
///
/// # Example
/// ```
/// use benford::{analyze, Mode};
///
/// let tokens = ["$1,200", "0.034", "271", "15", "1.9"];
/// let analysis = analyze(&tokens, Mode::FirstDigit).unwrap();
/// assert_eq!(analysis.total, 5);
/// assert_eq!(analysis.observed.get(1), Some(3));
/// assert_eq!(analysis.result.degrees_of_freedom, 8);
/// ```
pub fn analyze<S: AsRef<str>>(tokens: &[S], mode: Mode) -> Result<BenfordAnalysis> {
    let extraction = extract_all(tokens, mode);

    if extraction.seen() > 0 {
        let ratio = extraction.rejected as f64 / extraction.seen() as f64;
        if ratio > REJECTION_WARN_RATIO {
            tracing::warn!(
                rejected = extraction.rejected,
                seen = extraction.seen(),
                "most observations have too few significant digits for mode {}",
                mode
            );
        }
    }

    let observed = DigitCount::from_values(&extraction.values, mode);
    let total = observed.total();
    if total == 0 {
        return Err(BenfordError::EmptyDataset {
            rejected: extraction.rejected,
        });
    }

    let table = ProbabilityTable::cached(mode);
    let expected = ExpectedCount::from_table(table, total)?;
    let result = goodness_of_fit(mode, &observed, &expected)?;

    let analysis = BenfordAnalysis {
        mode,
        total,
        rejected: extraction.rejected,
        observed,
        expected,
        result,
    };

    let min_expected = analysis.min_expected();
    if min_expected < MIN_EXPECTED_COUNT {
        tracing::warn!(
            min_expected,
            "expected counts below {} make the chi-squared test unreliable",
            MIN_EXPECTED_COUNT
        );
    }

    tracing::info!(
        mode = %mode,
        total,
        statistic = analysis.result.statistic,
        is_fit = analysis.result.is_fit,
        "benford analysis complete"
    );

    Ok(analysis)
}
