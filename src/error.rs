//! Error taxonomy for Benford analysis
//!
//! Rejected observations are not errors: they are counted and dropped
//! (see [`crate::extract::Extraction::rejected`]).

use crate::mode::Mode;
use thiserror::Error;

/// Errors that abort a Benford analysis run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenfordError {
    #[error("invalid mode '{0}': expected one of 1, 2, 3, 12, 123")]
    InvalidMode(String),

    #[error("no valid observations for this mode ({rejected} tokens rejected)")]
    EmptyDataset { rejected: usize },

    #[error("expected count for digit {digit} is zero; chi-squared is undefined")]
    DegenerateExpectedValue { digit: u16 },

    #[error("observed and expected counts disagree on digit {digit}")]
    DomainMismatch { digit: u16 },

    #[error("counts built for mode {found} cannot be tested as mode {expected}")]
    ModeMismatch { expected: Mode, found: Mode },

    #[error("expected count for digit {digit} must be finite and non-negative, got {value}")]
    InvalidExpectedValue { digit: u16, value: f64 },
}

/// Result type for Benford analysis operations
pub type Result<T> = std::result::Result<T, BenfordError>;
