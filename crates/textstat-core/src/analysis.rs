//! The analysis pipeline.
//!
//! One call runs validation → tokenization → statistics → assembly and
//! returns the finished [`AnalysisReport`]. Each stage constructs a new
//! value; nothing is shared or mutated, so independent analyses are safe
//! to run concurrently.

use chrono::{DateTime, Utc};

use crate::error::ValidationResult;
use crate::report::{self, AnalysisReport};
use crate::stats;
use crate::text;
use crate::validate;

/// Analyze raw text and produce a report.
///
/// Fails only on validation (empty or whitespace-only input). Every
/// downstream stage is total over validated input.
///
/// `now` is injected rather than read from the clock so callers (and
/// tests) control the report's timestamp.
#[tracing::instrument(skip(raw), fields(source = source_name, input_len = raw.len()))]
pub fn run_analysis(
    raw: &str,
    source_name: &str,
    now: DateTime<Utc>,
) -> ValidationResult<AnalysisReport> {
    let validated = validate::validate(raw)?;
    let tokens = text::tokenize(&validated);
    let statistics = stats::build_statistics(&tokens.paragraphs, &tokens.sentences, &tokens.words);

    tracing::debug!(
        words = statistics.total_words,
        sentences = statistics.total_sentences,
        paragraphs = statistics.total_paragraphs,
        score = statistics.readability_score,
        "analysis complete"
    );

    Ok(report::assemble(source_name, now, &validated, statistics))
}
