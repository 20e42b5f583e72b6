//! Digit-position modes
//!
//! A [`Mode`] selects which significant digit (or joint prefix) is tested.
//! Every per-mode fact lives here: selector token, chart label, digit
//! domain and the chi-squared critical value at α = 0.05.

use crate::error::BenfordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Significance level of every critical value in [`Mode::critical_value`]
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Which digits of each observation are tested against Benford's Law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    /// First significant digit, domain 1..=9
    FirstDigit,
    /// Second significant digit, domain 0..=9
    SecondDigit,
    /// Third significant digit, domain 0..=9
    ThirdDigit,
    /// Joint first two digits, domain 10..=99
    FirstTwoDigits,
    /// Joint first three digits, domain 100..=999
    FirstThreeDigits,
}

/// Degrees of freedom and critical value of the chi-squared test for a mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValue {
    pub degrees_of_freedom: u32,
    pub value: f64,
}

impl Mode {
    /// All modes, in selector order
    pub const ALL: [Mode; 5] = [
        Mode::FirstDigit,
        Mode::SecondDigit,
        Mode::ThirdDigit,
        Mode::FirstTwoDigits,
        Mode::FirstThreeDigits,
    ];

    /// Command-line selector token ("1", "2", "3", "12", "123")
    pub fn selector(self) -> &'static str {
        match self {
            Mode::FirstDigit => "1",
            Mode::SecondDigit => "2",
            Mode::ThirdDigit => "3",
            Mode::FirstTwoDigits => "12",
            Mode::FirstThreeDigits => "123",
        }
    }

    /// Human-readable label used in report titles ("First Two", ...)
    pub fn label(self) -> &'static str {
        match self {
            Mode::FirstDigit => "First",
            Mode::SecondDigit => "Second",
            Mode::ThirdDigit => "Third",
            Mode::FirstTwoDigits => "First Two",
            Mode::FirstThreeDigits => "First Three",
        }
    }

    /// Number of cleaned digits an observation needs to yield a value
    pub fn required_digits(self) -> usize {
        match self {
            Mode::FirstDigit => 1,
            Mode::SecondDigit | Mode::FirstTwoDigits => 2,
            Mode::ThirdDigit | Mode::FirstThreeDigits => 3,
        }
    }

    /// Inclusive range of digit values this mode produces
    pub fn domain(self) -> RangeInclusive<u16> {
        match self {
            Mode::FirstDigit => 1..=9,
            Mode::SecondDigit | Mode::ThirdDigit => 0..=9,
            Mode::FirstTwoDigits => 10..=99,
            Mode::FirstThreeDigits => 100..=999,
        }
    }

    /// Number of values in [`Mode::domain`]
    pub fn domain_len(self) -> usize {
        let domain = self.domain();
        usize::from(domain.end() - domain.start()) + 1
    }

    /// Chi-squared critical value at α = 0.05, fixed per mode
    pub fn critical_value(self) -> CriticalValue {
        let (degrees_of_freedom, value) = match self {
            Mode::FirstDigit => (8, 15.51),
            Mode::SecondDigit => (9, 16.92),
            Mode::ThirdDigit => (9, 16.92),
            Mode::FirstTwoDigits => (89, 111.02),
            Mode::FirstThreeDigits => (899, 969.86),
        };
        CriticalValue {
            degrees_of_freedom,
            value,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Mode {
    type Err = BenfordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.selector() == s)
            .ok_or_else(|| BenfordError::InvalidMode(s.to_string()))
    }
}
