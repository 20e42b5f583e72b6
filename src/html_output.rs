//! HTML output format for Benford analysis reports
//!
//! Self-contained document: embedded CSS, an inline SVG chart (observed
//! counts as bars, expected counts as an overlay line), the per-digit table
//! and the chi-squared annotation.

use crate::analysis::{BenfordAnalysis, DigitRow};
use crate::config::ReportConfig;
use crate::text_output::{title, verdict_message};
use std::fmt::Write;

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 300.0;
const CHART_MARGIN: f64 = 30.0;

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    analysis: &'a BenfordAnalysis,
    source: &'a str,
    config: &'a ReportConfig,
}

impl<'a> HtmlOutput<'a> {
    /// Create a new HTML output formatter
    pub fn new(analysis: &'a BenfordAnalysis, source: &'a str, config: &'a ReportConfig) -> Self {
        Self {
            analysis,
            source,
            config,
        }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 6px 12px;
            text-align: right;
            font-family: monospace;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .chart {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        .observed {
            fill: #add8e6;
        }
        .expected {
            fill: none;
            stroke: #006400;
            stroke-width: 2;
        }
        .annotation {
            font-family: monospace;
            white-space: pre;
        }
        .verdict-fit {
            color: #2e7d32;
            font-weight: bold;
        }
        .verdict-nofit {
            color: #cc0000;
            font-weight: bold;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Generate HTML table header
    fn generate_header() -> String {
        let headers = ["Digit", "Observed", "Expected", "Probability"];
        let header_cells: Vec<String> = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();

        format!("<tr>{}</tr>", header_cells.join(""))
    }

    /// Format a digit row as HTML table row
    fn format_row(&self, row: &DigitRow) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{:.*}</td><td>{:.5}</td></tr>",
            row.digit, row.observed, self.config.precision, row.expected, row.probability
        )
    }

    /// Render observed bars and the expected polyline as inline SVG
    fn render_chart(&self, rows: &[DigitRow]) -> String {
        let scale = (self.analysis.observed.max() as f64)
            .max(self.analysis.expected.max())
            .max(1.0);
        let plot_width = CHART_WIDTH - 2.0 * CHART_MARGIN;
        let plot_height = CHART_HEIGHT - 2.0 * CHART_MARGIN;
        let slot = plot_width / rows.len().max(1) as f64;
        let baseline = CHART_HEIGHT - CHART_MARGIN;
        let y_of = |value: f64| baseline - (value / scale) * plot_height;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "    <svg class=\"chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = CHART_WIDTH,
            h = CHART_HEIGHT
        );

        let mut points = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let x = CHART_MARGIN + i as f64 * slot;
            let top = y_of(row.observed as f64);
            let _ = writeln!(
                svg,
                "        <rect class=\"observed\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"><title>{}: {}</title></rect>",
                x + slot * 0.1,
                top,
                slot * 0.8,
                baseline - top,
                row.digit,
                row.observed
            );
            points.push(format!("{:.2},{:.2}", x + slot / 2.0, y_of(row.expected)));
        }

        let _ = writeln!(
            svg,
            "        <polyline class=\"expected\" points=\"{}\" />",
            points.join(" ")
        );

        // Label the first and last domain values on the x axis
        if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
            let _ = writeln!(
                svg,
                "        <text x=\"{:.2}\" y=\"{:.2}\">{}</text>",
                CHART_MARGIN,
                CHART_HEIGHT - 8.0,
                first.digit
            );
            let _ = writeln!(
                svg,
                "        <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\">{}</text>",
                CHART_WIDTH - CHART_MARGIN,
                CHART_HEIGHT - 8.0,
                last.digit
            );
        }

        svg.push_str("    </svg>\n");
        svg
    }

    fn render_annotation(&self) -> String {
        let result = &self.analysis.result;
        let class = if result.is_fit {
            "verdict-fit"
        } else {
            "verdict-nofit"
        };

        let mut html = String::new();
        let _ = writeln!(
            html,
            "    <div class=\"annotation\">dof={}\nChi2={:.*}\nCritical Value={}\nalpha={}</div>",
            result.degrees_of_freedom,
            self.config.precision,
            result.statistic,
            result.critical_value,
            result.significance_level
        );
        let _ = writeln!(
            html,
            "    <p class=\"{}\">{}</p>",
            class,
            verdict_message(self.analysis)
        );
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let rows = self.analysis.rows();
        let heading = Self::escape_html(&title(self.analysis, self.source));
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(html, "    <title>{}</title>", heading);
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        let _ = writeln!(html, "    <h1>{}</h1>", heading);
        let _ = writeln!(
            html,
            "    <p>{} observations analysed, {} rejected.</p>",
            self.analysis.total, self.analysis.rejected
        );

        if self.config.show_chart {
            html.push_str(&self.render_chart(&rows));
        }

        html.push_str(&self.render_annotation());

        html.push_str("    <h2>Digit Counts</h2>\n");
        html.push_str("    <table>\n");
        html.push_str("        ");
        html.push_str(&Self::generate_header());
        html.push('\n');

        for row in &rows {
            html.push_str("        ");
            html.push_str(&self.format_row(row));
            html.push('\n');
        }

        html.push_str("    </table>\n");

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by benford - Benford's Law goodness-of-fit test\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::mode::Mode;

    fn sample() -> BenfordAnalysis {
        analyze(&["1", "12", "2", "3", "19", "5"], Mode::FirstDigit).unwrap()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(HtmlOutput::escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(HtmlOutput::escape_html("a&b"), "a&amp;b");
        assert_eq!(HtmlOutput::escape_html("\"test\""), "&quot;test&quot;");
        assert_eq!(HtmlOutput::escape_html("'test'"), "&#39;test&#39;");
    }

    #[test]
    fn test_html_output_basic_structure() {
        let analysis = sample();
        let config = ReportConfig::default();
        let html = HtmlOutput::new(&analysis, "data.txt", &config).to_html();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("<polyline"));
        assert!(html.contains("<table"));
        assert!(html.contains("Critical Value=15.51"));
    }

    #[test]
    fn test_html_output_one_bar_and_row_per_digit() {
        let analysis = sample();
        let config = ReportConfig::default();
        let html = HtmlOutput::new(&analysis, "data.txt", &config).to_html();

        assert_eq!(html.matches("<rect class=\"observed\"").count(), 9);
        assert_eq!(html.matches("<tr><td>").count(), 9);
    }

    #[test]
    fn test_html_output_without_chart() {
        let analysis = sample();
        let config = ReportConfig {
            show_chart: false,
            ..ReportConfig::default()
        };
        let html = HtmlOutput::new(&analysis, "data.txt", &config).to_html();
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_html_output_escapes_source() {
        let analysis = sample();
        let config = ReportConfig::default();
        let html = HtmlOutput::new(&analysis, "<script>alert('x')</script>", &config).to_html();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_output_header_columns() {
        let header = HtmlOutput::generate_header();
        assert!(header.contains("Digit"));
        assert!(header.contains("Observed"));
        assert!(header.contains("Expected"));
        assert!(header.contains("Probability"));
    }

    #[test]
    fn test_html_verdict_class() {
        let analysis = analyze(&vec!["8"; 100], Mode::FirstDigit).unwrap();
        let config = ReportConfig::default();
        let html = HtmlOutput::new(&analysis, "data.txt", &config).to_html();
        assert!(html.contains("verdict-nofit"));
    }
}
