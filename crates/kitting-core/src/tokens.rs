//! Tree token files: one token per line.

use std::path::Path;

use anyhow::{Context, Result};

/// Splits a token file into tokens. Blank lines and `#` comments are skipped.
pub fn parse_tokens(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_tokens(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree from {}", path.display()))?;
    Ok(parse_tokens(&content))
}
