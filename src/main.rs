use anyhow::{Context, Result};
use benford::cli::{Cli, OutputFormat};
use benford::config::BenfordConfig;
use benford::csv_output::CsvOutput;
use benford::html_output::HtmlOutput;
use benford::json_output::JsonReport;
use benford::text_output::TextReport;
use benford::{analyze, input, BenfordAnalysis};
use clap::Parser;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load configuration from --config (or defaults) and apply CLI overrides
fn load_config(args: &Cli) -> Result<BenfordConfig> {
    let mut config = match &args.config {
        Some(path) => BenfordConfig::from_toml(path)?,
        None => BenfordConfig::default(),
    };

    if args.no_chart {
        config.report.show_chart = false;
    }
    if let Some(width) = args.chart_width {
        config.report.chart_width = width;
    }

    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

/// Render the analysis in the requested output format
fn render(
    format: OutputFormat,
    analysis: &BenfordAnalysis,
    source: &str,
    config: &BenfordConfig,
) -> Result<String> {
    let report = match format {
        OutputFormat::Text => TextReport::new(analysis, source, &config.report).render(),
        OutputFormat::Json => {
            let mut json = JsonReport::new(analysis, source)
                .to_json()
                .context("Failed to serialize JSON report")?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => CsvOutput::from_analysis(analysis).to_csv(),
        OutputFormat::Html => HtmlOutput::new(analysis, source, &config.report).to_html(),
    };
    Ok(report)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    let source = args.file.display().to_string();

    let tokens = input::read_tokens(&args.file, &config.input)?;
    let analysis = analyze(&tokens, args.mode)
        .with_context(|| format!("Cannot analyse {} for mode {}", source, args.mode))?;

    let report = render(args.format, &analysis, &source, &config)?;

    match &args.output {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{}", report),
    }

    Ok(())
}
