//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use std::io::Read as _;

use textstat_core::Config;

pub mod analyze;
pub mod export;
pub mod info;

/// Text read from a file or stdin, with its provenance label.
pub struct Input {
    /// The raw text.
    pub content: String,
    /// Label for the report: the file name, or "Manual Input" for stdin.
    pub source_name: String,
    /// Whether the input looks like markdown (`.md` extension).
    pub markdown: bool,
}

/// Read analysis input from a file, or from stdin when `path` is `-`.
///
/// Validates size against the configured limit before reading files into
/// memory; stdin is checked after reading since it has no metadata.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Input> {
    if path.as_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        check_size(content.len(), "stdin", max_bytes)?;
        return Ok(Input {
            content,
            source_name: "Manual Input".to_string(),
            markdown: false,
        });
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_size(metadata.len() as usize, path.as_str(), max_bytes)?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    let source_name = path.file_name().unwrap_or(path.as_str()).to_string();

    Ok(Input {
        content,
        source_name,
        markdown: path.extension() == Some("md"),
    })
}

fn check_size(size: usize, label: &str, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Apply configured markdown stripping to an input.
pub fn prepare_text(input: &Input, config: &Config) -> String {
    if input.markdown && config.strip_markdown_enabled() {
        textstat_core::markdown::strip_to_prose(&input.content)
    } else {
        input.content.clone()
    }
}
