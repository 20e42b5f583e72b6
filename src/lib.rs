//! Benford - Benford's Law goodness-of-fit testing for numeric datasets
//!
//! This library extracts significant digits from raw numeric text, computes
//! the Benford-predicted distribution for first, second, third or joint
//! leading digits, and runs a chi-squared test to flag datasets whose digits
//! deviate from the law.

pub mod analysis;
pub mod benford_model;
pub mod chi_squared;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod html_output;
pub mod input;
pub mod json_output;
pub mod mode;
pub mod text_output;

pub use analysis::{analyze, BenfordAnalysis, DigitRow};
pub use benford_model::ProbabilityTable;
pub use chi_squared::{chi_squared_statistic, goodness_of_fit, ChiSquaredResult};
pub use error::{BenfordError, Result};
pub use extract::{extract_all, extract_digit, significant_digits, Extraction};
pub use frequency::{DigitCount, ExpectedCount};
pub use mode::{CriticalValue, Mode, SIGNIFICANCE_LEVEL};
