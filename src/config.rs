//! Configuration loaded from `benford.toml`
//!
//! Every field has a default, so an empty file (or no file at all) is valid.
//!
//! ```toml
//! [input]
//! comment_prefix = "#"
//! delimiters = [",", ";"]
//!
//! [report]
//! chart_width = 60
//! precision = 2
//! show_chart = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How raw input text is split into observation tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Text from this prefix to the end of the line is ignored
    pub comment_prefix: Option<String>,

    /// Token separators in addition to whitespace
    pub delimiters: Vec<char>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            comment_prefix: Some("#".to_string()),
            delimiters: Vec::new(),
        }
    }
}

/// Presentation settings shared by all output formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Maximum bar length of the text chart, in characters
    pub chart_width: usize,

    /// Decimal places for expected counts and the chi-squared statistic
    pub precision: usize,

    /// Render the chart in text and HTML reports
    pub show_chart: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_width: 50,
            precision: 2,
            show_chart: true,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenfordConfig {
    pub input: InputConfig,
    pub report: ReportConfig,
}

impl BenfordConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=200).contains(&self.report.chart_width) {
            return Err(format!(
                "report.chart_width must be in [1, 200], got {}",
                self.report.chart_width
            ));
        }

        if self.report.precision > 10 {
            return Err(format!(
                "report.precision must be <= 10, got {}",
                self.report.precision
            ));
        }

        if let Some(d) = self.input.delimiters.iter().find(|c| c.is_ascii_digit()) {
            return Err(format!("input.delimiters must not contain digits, got '{}'", d));
        }

        if matches!(self.input.comment_prefix.as_deref(), Some("")) {
            return Err("input.comment_prefix must not be empty".to_string());
        }

        Ok(())
    }
}
