//! Closed-form Benford probability tables
//!
//! All formulas derive from the joint significant-digit law
//! `P(D1..Dk = n) = log10(1 + 1/n)`, where `n` is the k-digit prefix:
//!
//! - first digit: `P(d) = log10(1 + 1/d)`
//! - second digit: `P(d2) = Σ_{d1=1..9} log10(1 + 1/(10*d1 + d2))`
//! - third digit: `P(d3) = Σ_{d1=1..9} Σ_{d2=0..9} log10(1 + 1/(100*d1 + 10*d2 + d3))`
//! - joint prefixes: `P(n) = log10(1 + 1/n)` for `n` in 10..=99 or 100..=999
//!
//! Tables are pure functions of the mode; [`ProbabilityTable::cached`]
//! computes each one at most once per process.

use crate::mode::Mode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Benford probability of every value in a mode's domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityTable {
    mode: Mode,
    probabilities: BTreeMap<u16, f64>,
}

/// Probability of the k-digit significant prefix `n`
fn prefix_probability(n: u16) -> f64 {
    (1.0 + 1.0 / f64::from(n)).log10()
}

impl ProbabilityTable {
    /// Compute the table for `mode`
    pub fn compute(mode: Mode) -> Self {
        let probabilities = mode
            .domain()
            .map(|digit| (digit, Self::formula(mode, digit)))
            .collect();

        Self {
            mode,
            probabilities,
        }
    }

    /// Shared table for `mode`, computed on first use
    pub fn cached(mode: Mode) -> &'static Self {
        static TABLES: [OnceLock<ProbabilityTable>; 5] = [
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
        ];

        TABLES[mode as usize].get_or_init(|| Self::compute(mode))
    }

    fn formula(mode: Mode, digit: u16) -> f64 {
        match mode {
            Mode::FirstDigit | Mode::FirstTwoDigits | Mode::FirstThreeDigits => {
                prefix_probability(digit)
            }
            Mode::SecondDigit => (1..=9).map(|d1| prefix_probability(10 * d1 + digit)).sum(),
            Mode::ThirdDigit => (1..=9)
                .flat_map(|d1| (0..=9).map(move |d2| 100 * d1 + 10 * d2))
                .map(|prefix| prefix_probability(prefix + digit))
                .sum(),
        }
    }

    /// Mode this table was computed for
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Probability of `digit`, `None` outside the mode's domain
    pub fn get(&self, digit: u16) -> Option<f64> {
        self.probabilities.get(&digit).copied()
    }

    /// `(digit, probability)` pairs in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.probabilities.iter().map(|(&d, &p)| (d, p))
    }

    /// Number of domain values in the table
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities (1.0 up to rounding)
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }
}
