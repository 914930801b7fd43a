//! Export command — run the pipeline and write one report rendering.

use anyhow::Context;
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::{Config, ExportFormat, export, run_analysis};

use super::{prepare_text, read_input};

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// File to analyze, or `-` for stdin.
    pub file: Utf8PathBuf,

    /// Export format.
    #[arg(long, value_enum)]
    pub format: ExportFormat,

    /// Destination path. Omit to print the rendering to stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<Utf8PathBuf>,

    /// Override the source label recorded in the report.
    #[arg(long, value_name = "NAME")]
    pub source_name: Option<String>,
}

/// Analyze a file and export the report in the requested format.
#[instrument(name = "cmd_export", skip_all, fields(file = %args.file, format = %args.format))]
pub fn cmd_export(
    args: ExportArgs,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, format = %args.format, out = ?args.out, "executing export command");

    let input = read_input(&args.file, max_input_bytes)?;
    let text = prepare_text(&input, config);
    let source_name = args.source_name.unwrap_or(input.source_name);

    let report = run_analysis(&text, &source_name, Utc::now())
        .with_context(|| format!("cannot analyze {}", args.file))?;

    match args.out {
        Some(ref path) => {
            let written = export::write_report(&report, args.format, path)
                .context("export failed; the analysis itself succeeded")?;
            println!("{} exported to {}", "OK:".green(), written);
        }
        None => {
            print!("{}", export::render(&report, args.format)?);
        }
    }

    Ok(())
}
