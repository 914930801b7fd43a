//! Analyze command — run the pipeline and display statistics.

use anyhow::Context;
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::{Config, ReadabilityLevel, export, run_analysis};

use super::{prepare_text, read_input};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze, or `-` for stdin.
    pub file: Utf8PathBuf,

    /// Print the condensed summary instead of the full display.
    #[arg(long)]
    pub summary: bool,

    /// Override the source label recorded in the report.
    #[arg(long, value_name = "NAME")]
    pub source_name: Option<String>,
}

/// Analyze a file and render its statistics to the terminal.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, summary = args.summary, "executing analyze command");

    let input = read_input(&args.file, max_input_bytes)?;
    let text = prepare_text(&input, config);
    let source_name = args.source_name.unwrap_or(input.source_name);

    let report = run_analysis(&text, &source_name, Utc::now())
        .with_context(|| format!("cannot analyze {}", args.file))?;

    if global_json {
        println!("{}", export::render_json(&report)?);
        return Ok(());
    }

    if args.summary {
        print!("{}", export::render_summary(&report));
        return Ok(());
    }

    let stats = &report.statistics;
    println!("{}", report.source_name.bold());

    println!(
        "\n  {} {} words, {} sentences, {} paragraphs, {} unique words",
        "Counts:".cyan(),
        stats.total_words,
        stats.total_sentences,
        stats.total_paragraphs,
        stats.unique_words,
    );

    println!(
        "\n  {} {:.2} words/sentence, {:.2} chars/word",
        "Averages:".cyan(),
        stats.average_sentence_length,
        stats.average_word_length,
    );

    let level = ReadabilityLevel::from_score(stats.readability_score);
    let score_str = if stats.readability_score >= 70.0 {
        format!("{:.2}", stats.readability_score).green().to_string()
    } else if stats.readability_score >= 50.0 {
        format!("{:.2}", stats.readability_score)
            .yellow()
            .to_string()
    } else {
        format!("{:.2}", stats.readability_score).red().to_string()
    };
    println!(
        "\n  {} {score_str}/100 ({level})",
        "Readability:".cyan(),
    );

    println!(
        "\n  {} longest \"{}\" ({} chars), shortest \"{}\" ({} chars)",
        "Extremes:".cyan(),
        stats.longest_word,
        stats.longest_word.chars().count(),
        stats.shortest_word,
        stats.shortest_word.chars().count(),
    );

    if !stats.top_word_frequencies.is_empty() {
        println!("\n  {}", "Top words:".cyan());
        for (rank, entry) in stats.top_word_frequencies.iter().enumerate() {
            println!("  {:>4}. {:<20} {:>5}", rank + 1, entry.word, entry.count);
        }
    }

    Ok(())
}
