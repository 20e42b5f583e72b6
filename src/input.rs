//! Input adapter: reads a dataset and splits it into observation tokens

use crate::config::InputConfig;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Split dataset text into raw observation tokens
///
/// Comments (from `comment_prefix` to end of line) are dropped, then each
/// line is split on whitespace and the configured delimiters.
pub fn tokenize(content: &str, config: &InputConfig) -> Vec<String> {
    let comment = config.comment_prefix.as_deref().filter(|p| !p.is_empty());
    let delimiters: &[char] = &config.delimiters;

    content
        .lines()
        .map(|line| match comment.and_then(|prefix| line.find(prefix)) {
            Some(idx) => &line[..idx],
            None => line,
        })
        .flat_map(move |line| {
            line.split(move |c: char| c.is_whitespace() || delimiters.contains(&c))
        })
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a dataset from `path` (or stdin for `-`) and tokenize it
///
/// Invalid UTF-8 is replaced rather than rejected; the replacement
/// characters are non-digits and vanish during extraction.
pub fn read_tokens<P: AsRef<Path>>(path: P, config: &InputConfig) -> Result<Vec<String>> {
    let path = path.as_ref();

    let bytes = if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read dataset from stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Failed to read dataset: {}", path.display()))?
    };

    let content = String::from_utf8_lossy(&bytes);
    let tokens = tokenize(&content, config);

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        tokens = tokens.len(),
        "dataset loaded"
    );

    Ok(tokens)
}
