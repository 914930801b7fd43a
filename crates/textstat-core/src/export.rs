//! Report exporters.
//!
//! Four stateless renderings of one [`AnalysisReport`]: JSON (machine
//! readable, full fidelity), a fixed-layout plain-text report, CSV (metric
//! rows then frequency rows), and a condensed summary for pasting. Each is
//! a pure function of the report; none performs analysis.

use std::fmt::Write as _;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{ExportError, ExportResult};
use crate::readability::ReadabilityLevel;
use crate::report::AnalysisReport;

/// Timestamp layout used in the text and CSV renderings.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Available export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    /// Machine-readable JSON object.
    Json,
    /// Human-readable fixed-layout report.
    Text,
    /// Two-table CSV: metrics, then ranked frequencies.
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render a report in the given format.
pub fn render(report: &AnalysisReport, format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Json => render_json(report),
        ExportFormat::Text => Ok(render_text(report)),
        ExportFormat::Csv => Ok(render_csv(report)),
    }
}

/// Render a report as pretty-printed JSON.
///
/// Field names follow the export contract: `fileName`, `analysisDate`
/// (RFC 3339), `originalText`, and a camelCase `statistics` object with
/// `topWordFrequencies` as ranked `{word, count}` entries.
pub fn render_json(report: &AnalysisReport) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the fixed-layout plain-text report.
pub fn render_text(report: &AnalysisReport) -> String {
    let stats = &report.statistics;
    let level = ReadabilityLevel::from_score(stats.readability_score);
    let mut out = String::new();

    out.push_str("╔════════════════════════════════════════════════════════════════╗\n");
    out.push_str("║              TEXT ANALYSIS REPORT                              ║\n");
    out.push_str("╚════════════════════════════════════════════════════════════════╝\n");
    out.push('\n');
    let _ = writeln!(out, "File Name: {}", report.source_name);
    let _ = writeln!(
        out,
        "Analysis Date: {}",
        report.analyzed_at.format(DATE_FORMAT)
    );
    out.push('\n');

    section(&mut out, "BASIC STATISTICS");
    let _ = writeln!(out, "Total Words:      {}", stats.total_words);
    let _ = writeln!(out, "Total Sentences:  {}", stats.total_sentences);
    let _ = writeln!(out, "Total Paragraphs: {}", stats.total_paragraphs);
    let _ = writeln!(out, "Unique Words:     {}", stats.unique_words);
    out.push('\n');

    section(&mut out, "AVERAGES");
    let _ = writeln!(
        out,
        "Average Sentence Length: {:.2} words",
        stats.average_sentence_length
    );
    let _ = writeln!(
        out,
        "Average Word Length:     {:.2} characters",
        stats.average_word_length
    );
    out.push('\n');

    section(&mut out, "READABILITY");
    let _ = writeln!(out, "Readability Score: {:.2}/100", stats.readability_score);
    let _ = writeln!(out, "Interpretation:    {level}");
    out.push('\n');

    section(&mut out, "WORD EXTREMES");
    let _ = writeln!(
        out,
        "Longest Word:  {} ({} characters)",
        stats.longest_word,
        stats.longest_word.chars().count()
    );
    let _ = writeln!(
        out,
        "Shortest Word: {} ({} characters)",
        stats.shortest_word,
        stats.shortest_word.chars().count()
    );
    out.push('\n');

    section(&mut out, "TOP 10 MOST FREQUENT WORDS");
    for (rank, entry) in stats.top_word_frequencies.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<20} → {:>5} occurrences",
            rank + 1,
            entry.word,
            entry.count
        );
    }
    out.push('\n');

    out.push_str(RULE);
    let _ = writeln!(
        out,
        "Report generated by textstat on {}",
        report.analyzed_at.format(DATE_FORMAT)
    );
    out.push_str(RULE);

    out
}

const RULE: &str = "═══════════════════════════════════════════════════════════════\n";

fn section(out: &mut String, title: &str) {
    out.push_str(RULE);
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
}

/// Render the two-table CSV: `Category,Metric,Value` rows, a blank
/// separator line, then `Rank,Word,Frequency` rows.
pub fn render_csv(report: &AnalysisReport) -> String {
    let stats = &report.statistics;
    let level = ReadabilityLevel::from_score(stats.readability_score);
    let mut out = String::new();

    out.push_str("Category,Metric,Value\n");
    let _ = writeln!(out, "Basic Statistics,Total Words,{}", stats.total_words);
    let _ = writeln!(
        out,
        "Basic Statistics,Total Sentences,{}",
        stats.total_sentences
    );
    let _ = writeln!(
        out,
        "Basic Statistics,Total Paragraphs,{}",
        stats.total_paragraphs
    );
    let _ = writeln!(out, "Basic Statistics,Unique Words,{}", stats.unique_words);
    let _ = writeln!(
        out,
        "Averages,Average Sentence Length,{:.2}",
        stats.average_sentence_length
    );
    let _ = writeln!(
        out,
        "Averages,Average Word Length,{:.2}",
        stats.average_word_length
    );
    let _ = writeln!(
        out,
        "Readability,Readability Score,{:.2}",
        stats.readability_score
    );
    let _ = writeln!(out, "Readability,Interpretation,\"{level}\"");
    let _ = writeln!(out, "Word Extremes,Longest Word,{}", stats.longest_word);
    let _ = writeln!(out, "Word Extremes,Shortest Word,{}", stats.shortest_word);
    out.push('\n');

    out.push_str("Rank,Word,Frequency\n");
    for (rank, entry) in stats.top_word_frequencies.iter().enumerate() {
        let _ = writeln!(out, "{},{},{}", rank + 1, entry.word, entry.count);
    }

    out
}

/// Render the condensed summary, sized for pasting into chat or email.
pub fn render_summary(report: &AnalysisReport) -> String {
    let stats = &report.statistics;
    let level = ReadabilityLevel::from_score(stats.readability_score);
    let mut out = String::new();

    out.push_str("TEXT ANALYSIS RESULTS\n");
    out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    out.push_str("BASIC COUNTS\n");
    let _ = writeln!(out, "  • Total Words: {}", stats.total_words);
    let _ = writeln!(out, "  • Total Sentences: {}", stats.total_sentences);
    let _ = writeln!(out, "  • Total Paragraphs: {}", stats.total_paragraphs);
    let _ = writeln!(out, "  • Unique Words: {}", stats.unique_words);
    out.push('\n');

    out.push_str("AVERAGES\n");
    let _ = writeln!(
        out,
        "  • Average Sentence Length: {:.2} words",
        stats.average_sentence_length
    );
    let _ = writeln!(
        out,
        "  • Average Word Length: {:.2} characters",
        stats.average_word_length
    );
    out.push('\n');

    out.push_str("READABILITY\n");
    let _ = writeln!(out, "  • Score: {:.2}/100", stats.readability_score);
    let _ = writeln!(out, "  • Level: {level}");
    out.push('\n');

    out.push_str("WORD EXTREMES\n");
    let _ = writeln!(
        out,
        "  • Longest: {} ({} chars)",
        stats.longest_word,
        stats.longest_word.chars().count()
    );
    let _ = writeln!(
        out,
        "  • Shortest: {} ({} chars)",
        stats.shortest_word,
        stats.shortest_word.chars().count()
    );
    out.push('\n');

    out.push_str("TOP 10 MOST FREQUENT WORDS\n");
    for (rank, entry) in stats.top_word_frequencies.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<20} → {} times",
            rank + 1,
            entry.word,
            entry.count
        );
    }

    out
}

/// Render a report and write it to `path`.
///
/// Returns the destination path on success. Failure leaves the report
/// untouched and exportable again.
#[tracing::instrument(skip(report), fields(format = %format, path = %path))]
pub fn write_report(
    report: &AnalysisReport,
    format: ExportFormat,
    path: &Utf8Path,
) -> ExportResult<Utf8PathBuf> {
    let payload = render(report, format)?;
    std::fs::write(path.as_std_path(), payload).map_err(|source| ExportError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(path.to_path_buf())
}
