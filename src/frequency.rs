//! Observed and expected digit frequencies
//!
//! Both [`DigitCount`] and [`ExpectedCount`] always hold exactly one entry
//! per value of the mode's domain, so they can be compared pairwise.

use crate::benford_model::ProbabilityTable;
use crate::error::{BenfordError, Result};
use crate::mode::Mode;
use serde::Serialize;
use std::collections::BTreeMap;

/// Observed count of every domain value (zero-filled)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitCount {
    mode: Mode,
    counts: BTreeMap<u16, u64>,
}

impl DigitCount {
    /// All-zero counts over the mode's domain
    pub fn empty(mode: Mode) -> Self {
        Self {
            mode,
            counts: mode.domain().map(|digit| (digit, 0)).collect(),
        }
    }

    /// Count extracted digit values
    ///
    /// Values outside the mode's domain are ignored; the extractor never
    /// produces them.
    pub fn from_values(values: &[u16], mode: Mode) -> Self {
        let mut counts = Self::empty(mode);
        for &value in values {
            if let Some(count) = counts.counts.get_mut(&value) {
                *count += 1;
            } else {
                tracing::warn!(value, mode = %mode, "digit value outside mode domain");
            }
        }
        counts
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Count for `digit`, `None` outside the domain
    pub fn get(&self, digit: u16) -> Option<u64> {
        self.counts.get(&digit).copied()
    }

    /// `(digit, count)` pairs in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Domain values in ascending order
    pub fn digits(&self) -> impl Iterator<Item = u16> + '_ {
        self.counts.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of observations (N)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Largest single count, for chart scaling
    pub fn max(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Expected count of every domain value: `probability * N`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedCount {
    mode: Mode,
    expected: BTreeMap<u16, f64>,
}

impl ExpectedCount {
    /// Scale `table` by `total` observations
    ///
    /// # Errors
    /// [`BenfordError::EmptyDataset`] when `total` is zero.
    pub fn from_table(table: &ProbabilityTable, total: u64) -> Result<Self> {
        if total == 0 {
            return Err(BenfordError::EmptyDataset { rejected: 0 });
        }

        let n = total as f64;
        Ok(Self {
            mode: table.mode(),
            expected: table.iter().map(|(digit, p)| (digit, p * n)).collect(),
        })
    }

    /// Build from explicit per-digit expectations
    ///
    /// # Errors
    /// - [`BenfordError::DomainMismatch`] unless `expected` has exactly one
    ///   entry per value of the mode's domain
    /// - [`BenfordError::InvalidExpectedValue`] for a negative or non-finite entry
    pub fn from_map(mode: Mode, expected: BTreeMap<u16, f64>) -> Result<Self> {
        if let Some(digit) = mode.domain().find(|d| !expected.contains_key(d)) {
            return Err(BenfordError::DomainMismatch { digit });
        }
        if let Some(digit) = expected.keys().copied().find(|d| !mode.domain().contains(d)) {
            return Err(BenfordError::DomainMismatch { digit });
        }
        if let Some((&digit, &value)) = expected
            .iter()
            .find(|(_, e)| !e.is_finite() || **e < 0.0)
        {
            return Err(BenfordError::InvalidExpectedValue { digit, value });
        }
        Ok(Self { mode, expected })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Expected count for `digit`, `None` outside the domain
    pub fn get(&self, digit: u16) -> Option<f64> {
        self.expected.get(&digit).copied()
    }

    /// `(digit, expected)` pairs in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.expected.iter().map(|(&d, &e)| (d, e))
    }

    /// Domain values in ascending order
    pub fn digits(&self) -> impl Iterator<Item = u16> + '_ {
        self.expected.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Sum of expected counts (N up to rounding)
    pub fn total(&self) -> f64 {
        self.expected.values().sum()
    }

    /// Largest expected count, for chart scaling
    pub fn max(&self) -> f64 {
        self.expected.values().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counts_cover_domain() {
        let counts = DigitCount::empty(Mode::FirstDigit);
        assert_eq!(counts.len(), 9);
        assert_eq!(counts.get(0), None);
        assert_eq!(counts.get(1), Some(0));
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_from_values_zero_fills() {
        let counts = DigitCount::from_values(&[5; 10], Mode::SecondDigit);
        assert_eq!(counts.len(), 10);
        assert_eq!(counts.get(5), Some(10));
        assert_eq!(counts.get(0), Some(0));
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.max(), 10);
    }

    #[test]
    fn test_from_values_ignores_out_of_domain() {
        let counts = DigitCount::from_values(&[0, 1, 1, 10], Mode::FirstDigit);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.get(1), Some(2));
    }

    #[test]
    fn test_expected_domain_matches_observed() {
        for mode in Mode::ALL {
            let observed = DigitCount::from_values(&[], mode);
            let table = ProbabilityTable::compute(mode);
            let expected = ExpectedCount::from_table(&table, 10).unwrap();
            assert!(observed.digits().eq(expected.digits()), "mode {}", mode);
        }
    }

    #[test]
    fn test_expected_scales_probabilities() {
        let table = ProbabilityTable::compute(Mode::FirstDigit);
        let expected = ExpectedCount::from_table(&table, 1000).unwrap();
        assert!((expected.get(1).unwrap() - 301.03).abs() < 0.01);
        assert!((expected.total() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_map_requires_exact_domain() {
        let full: BTreeMap<u16, f64> = (1..=9).map(|d| (d, 1.0)).collect();
        assert!(ExpectedCount::from_map(Mode::FirstDigit, full.clone()).is_ok());

        let mut missing = full.clone();
        missing.remove(&5);
        assert_eq!(
            ExpectedCount::from_map(Mode::FirstDigit, missing),
            Err(BenfordError::DomainMismatch { digit: 5 })
        );

        let mut extra = full;
        extra.insert(0, 1.0);
        assert_eq!(
            ExpectedCount::from_map(Mode::FirstDigit, extra),
            Err(BenfordError::DomainMismatch { digit: 0 })
        );
    }

    #[test]
    fn test_from_map_rejects_negative_and_non_finite_values() {
        let full: BTreeMap<u16, f64> = (1..=9).map(|d| (d, 1.0)).collect();

        let mut negative = full.clone();
        negative.insert(2, -1.0);
        assert_eq!(
            ExpectedCount::from_map(Mode::FirstDigit, negative),
            Err(BenfordError::InvalidExpectedValue {
                digit: 2,
                value: -1.0
            })
        );

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut map = full.clone();
            map.insert(7, bad);
            assert!(matches!(
                ExpectedCount::from_map(Mode::FirstDigit, map),
                Err(BenfordError::InvalidExpectedValue { digit: 7, .. })
            ));
        }

        let mut zero = full;
        zero.insert(3, 0.0);
        assert!(ExpectedCount::from_map(Mode::FirstDigit, zero).is_ok());
    }

    #[test]
    fn test_expected_rejects_empty_dataset() {
        let table = ProbabilityTable::compute(Mode::ThirdDigit);
        assert!(matches!(
            ExpectedCount::from_table(&table, 0),
            Err(BenfordError::EmptyDataset { .. })
        ));
    }
}
