//! CLI argument parsing for benford

use crate::mode::Mode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with an ASCII chart (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Self-contained HTML report with an SVG chart
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "benford")]
#[command(version)]
#[command(
    about = "Test whether a dataset's leading digits follow Benford's Law",
    long_about = None
)]
pub struct Cli {
    /// Digits to test: 1, 2, 3 (single position) or 12, 123 (joint first digits)
    #[arg(value_name = "MODE")]
    pub mode: Mode,

    /// Dataset of whitespace-separated numbers ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load settings from a TOML configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Omit the chart from text and HTML reports
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Maximum bar width of the text chart
    #[arg(long = "chart-width", value_name = "N")]
    pub chart_width: Option<usize>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
