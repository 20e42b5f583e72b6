//! Chi-squared goodness-of-fit test against the Benford distribution
//!
//! The statistic is compared with the fixed per-mode critical value at
//! α = 0.05 (see [`Mode::critical_value`]). The null hypothesis (the data
//! follows Benford's Law) is kept only when `χ² < critical value`; a
//! statistic equal to the critical value is a rejection.

use crate::error::{BenfordError, Result};
use crate::frequency::{DigitCount, ExpectedCount};
use crate::mode::{Mode, SIGNIFICANCE_LEVEL};
use serde::{Deserialize, Serialize};

/// Outcome of the goodness-of-fit test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquaredResult {
    /// χ² statistic (≥ 0)
    pub statistic: f64,
    pub degrees_of_freedom: u32,
    /// Critical value at [`ChiSquaredResult::significance_level`]
    pub critical_value: f64,
    pub significance_level: f64,
    /// True when the observed digits are consistent with Benford's Law
    pub is_fit: bool,
}

/// Compute `Σ (observed - expected)² / expected` over the shared domain
///
/// # Errors
/// - [`BenfordError::ModeMismatch`] if the tables were built for different modes
/// - [`BenfordError::DomainMismatch`] if the two tables cover different digits
/// - [`BenfordError::DegenerateExpectedValue`] if an expected count is zero
pub fn chi_squared_statistic(observed: &DigitCount, expected: &ExpectedCount) -> Result<f64> {
    if observed.mode() != expected.mode() {
        return Err(BenfordError::ModeMismatch {
            expected: observed.mode(),
            found: expected.mode(),
        });
    }
    if observed.len() != expected.len() {
        let digit = observed
            .digits()
            .find(|&d| expected.get(d).is_none())
            .or_else(|| expected.digits().find(|&d| observed.get(d).is_none()))
            .unwrap_or_default();
        return Err(BenfordError::DomainMismatch { digit });
    }

    let mut statistic = 0.0;
    for (digit, count) in observed.iter() {
        let expected = expected
            .get(digit)
            .ok_or(BenfordError::DomainMismatch { digit })?;

        if expected == 0.0 {
            return Err(BenfordError::DegenerateExpectedValue { digit });
        }

        let diff = count as f64 - expected;
        statistic += diff * diff / expected;
    }

    Ok(statistic)
}

/// Verdict for a statistic: strictly below the critical value
pub fn is_fit(mode: Mode, statistic: f64) -> bool {
    statistic < mode.critical_value().value
}

/// Run the chi-squared test for `mode`
///
/// Both tables must have been built for `mode`.
pub fn goodness_of_fit(
    mode: Mode,
    observed: &DigitCount,
    expected: &ExpectedCount,
) -> Result<ChiSquaredResult> {
    if observed.mode() != mode {
        return Err(BenfordError::ModeMismatch {
            expected: mode,
            found: observed.mode(),
        });
    }
    let statistic = chi_squared_statistic(observed, expected)?;
    let critical = mode.critical_value();
    let fit = is_fit(mode, statistic);

    tracing::debug!(
        mode = %mode,
        statistic,
        critical_value = critical.value,
        is_fit = fit,
        "chi-squared test"
    );

    Ok(ChiSquaredResult {
        statistic,
        degrees_of_freedom: critical.degrees_of_freedom,
        critical_value: critical.value,
        significance_level: SIGNIFICANCE_LEVEL,
        is_fit: fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benford_model::ProbabilityTable;

    fn expected_for(mode: Mode, total: u64) -> ExpectedCount {
        ExpectedCount::from_table(&ProbabilityTable::compute(mode), total).unwrap()
    }

    #[test]
    fn test_known_statistic() {
        // Every observation is a 1: χ² = N/p1 - N for N observations
        let observed = DigitCount::from_values(&[1; 100], Mode::FirstDigit);
        let expected = expected_for(Mode::FirstDigit, 100);
        let p1 = ProbabilityTable::compute(Mode::FirstDigit).get(1).unwrap();

        let stat = chi_squared_statistic(&observed, &expected).unwrap();
        assert!((stat - (100.0 / p1 - 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_first_digit_critical_value_is_unconditional() {
        let observed = DigitCount::from_values(&[9; 50], Mode::FirstDigit);
        let expected = expected_for(Mode::FirstDigit, 50);

        let result = goodness_of_fit(Mode::FirstDigit, &observed, &expected).unwrap();
        assert_eq!(result.degrees_of_freedom, 8);
        assert_eq!(result.critical_value, 15.51);
        assert_eq!(result.significance_level, 0.05);
        assert!(!result.is_fit);
    }

    #[test]
    fn test_exact_match_gives_zero_statistic() {
        // Every domain digit occurs, so every expected count is positive
        let values: Vec<u16> = (1..=9).chain([1, 1, 3]).collect();
        let observed = DigitCount::from_values(&values, Mode::FirstDigit);
        let expected = ExpectedCount::from_map(
            Mode::FirstDigit,
            observed.iter().map(|(d, c)| (d, c as f64)).collect(),
        )
        .unwrap();

        let result = goodness_of_fit(Mode::FirstDigit, &observed, &expected).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!(result.is_fit);
    }

    #[test]
    fn test_zero_expected_value_is_an_error() {
        let observed = DigitCount::from_values(&[1, 2], Mode::FirstDigit);
        let mut map: std::collections::BTreeMap<u16, f64> =
            Mode::FirstDigit.domain().map(|d| (d, 1.0)).collect();
        map.insert(4, 0.0);
        let expected = ExpectedCount::from_map(Mode::FirstDigit, map).unwrap();

        assert_eq!(
            chi_squared_statistic(&observed, &expected),
            Err(BenfordError::DegenerateExpectedValue { digit: 4 })
        );
    }

    #[test]
    fn test_statistic_at_critical_value_is_not_fit() {
        for mode in Mode::ALL {
            let critical = mode.critical_value().value;
            assert!(!is_fit(mode, critical), "mode {}", mode);
            assert!(is_fit(mode, critical - 0.01), "mode {}", mode);
        }
    }

    #[test]
    fn test_tables_from_different_modes_are_rejected() {
        // Second and third digit share the 0..=9 domain, only the mode differs
        let observed = DigitCount::from_values(&[1, 2, 3], Mode::SecondDigit);
        let expected = expected_for(Mode::ThirdDigit, 3);

        assert_eq!(
            chi_squared_statistic(&observed, &expected),
            Err(BenfordError::ModeMismatch {
                expected: Mode::SecondDigit,
                found: Mode::ThirdDigit,
            })
        );
        assert_eq!(
            goodness_of_fit(Mode::SecondDigit, &observed, &expected),
            Err(BenfordError::ModeMismatch {
                expected: Mode::SecondDigit,
                found: Mode::ThirdDigit,
            })
        );
    }

    #[test]
    fn test_mode_argument_must_match_counts() {
        let observed = DigitCount::from_values(&[5, 0, 9], Mode::SecondDigit);
        let expected = expected_for(Mode::SecondDigit, 3);

        assert_eq!(
            goodness_of_fit(Mode::FirstTwoDigits, &observed, &expected),
            Err(BenfordError::ModeMismatch {
                expected: Mode::FirstTwoDigits,
                found: Mode::SecondDigit,
            })
        );
    }

    #[test]
    fn test_statistic_is_non_negative() {
        for mode in Mode::ALL {
            let values: Vec<u16> = mode.domain().collect();
            let observed = DigitCount::from_values(&values, mode);
            let expected = expected_for(mode, observed.total());
            let result = goodness_of_fit(mode, &observed, &expected).unwrap();
            assert!(result.statistic >= 0.0);
        }
    }
}
