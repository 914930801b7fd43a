//! Report assembly.
//!
//! Bundles computed statistics with provenance into the immutable
//! [`AnalysisReport`], the unit of export. Assembly never fails: all
//! failure modes live upstream in validation.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stats::TextStatistics;
use crate::validate::ValidatedText;

/// Maximum excerpt length, in characters.
const EXCERPT_LIMIT: usize = 500;

/// Marker appended to a truncated excerpt.
const EXCERPT_ELLIPSIS: &str = "...";

/// An immutable analysis result: provenance plus statistics.
///
/// Created once per successful analysis and held by the caller;
/// superseded, never mutated, by the next analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Label for the input's origin, e.g. a file name or "Manual Input".
    #[serde(rename = "fileName")]
    pub source_name: String,
    /// When the analysis ran.
    #[serde(rename = "analysisDate")]
    pub analyzed_at: DateTime<Utc>,
    /// Up to 500 characters of the analyzed text, `...`-terminated when
    /// truncated.
    #[serde(rename = "originalText")]
    pub original_text_excerpt: String,
    /// The computed statistics.
    pub statistics: TextStatistics,
}

/// Assemble a report from statistics and provenance.
///
/// The excerpt is truncated at a character boundary, so multi-byte input
/// never splits a code point.
pub fn assemble(
    source_name: &str,
    now: DateTime<Utc>,
    text: &ValidatedText,
    statistics: TextStatistics,
) -> AnalysisReport {
    AnalysisReport {
        source_name: source_name.to_string(),
        analyzed_at: now,
        original_text_excerpt: excerpt(text.as_str()),
        statistics,
    }
}

fn excerpt(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(EXCERPT_LIMIT) {
        // More than EXCERPT_LIMIT chars: cut and mark.
        Some((byte_index, _)) => {
            let mut truncated = text[..byte_index].to_string();
            truncated.push_str(EXCERPT_ELLIPSIS);
            truncated
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::build_statistics;
    use crate::validate::validate;

    fn sample_stats() -> TextStatistics {
        build_statistics(&[], &[], &[])
    }

    #[test]
    fn short_text_is_kept_verbatim() {
        let text = validate("short text").unwrap();
        let report = assemble("Manual Input", Utc::now(), &text, sample_stats());
        assert_eq!(report.original_text_excerpt, "short text");
    }

    #[test]
    fn exactly_500_chars_is_not_truncated() {
        let input = "x".repeat(500);
        let text = validate(&input).unwrap();
        let report = assemble("f.txt", Utc::now(), &text, sample_stats());
        assert_eq!(report.original_text_excerpt, input);
    }

    #[test]
    fn long_text_is_truncated_with_marker() {
        let input = "y".repeat(501);
        let text = validate(&input).unwrap();
        let report = assemble("f.txt", Utc::now(), &text, sample_stats());
        assert_eq!(report.original_text_excerpt.chars().count(), 503);
        assert!(report.original_text_excerpt.ends_with("..."));
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let input = "é".repeat(600);
        let text = validate(&input).unwrap();
        let report = assemble("f.txt", Utc::now(), &text, sample_stats());
        assert!(report.original_text_excerpt.starts_with("é"));
        assert_eq!(report.original_text_excerpt.chars().count(), 503);
    }

    #[test]
    fn provenance_is_carried_through() {
        let text = validate("body").unwrap();
        let now = Utc::now();
        let report = assemble("essay.txt", now, &text, sample_stats());
        assert_eq!(report.source_name, "essay.txt");
        assert_eq!(report.analyzed_at, now);
    }
}
