//! Statistics aggregation.
//!
//! Turns the three token sequences into one immutable [`TextStatistics`]
//! value: counts, averages, word extremes, frequency ranking, and the
//! readability score. Pure functions only: no I/O and no state, so the
//! same input always produces the same statistics.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability;

/// How many ranked frequency entries a report carries.
const TOP_WORD_LIMIT: usize = 10;

/// One entry in the ranked word-frequency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// Case-normalized word form.
    pub word: String,
    /// Number of occurrences across the text.
    pub count: usize,
}

/// Aggregated statistics for one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    /// Total word count.
    pub total_words: usize,
    /// Total sentence count.
    pub total_sentences: usize,
    /// Total paragraph count.
    pub total_paragraphs: usize,
    /// Count of distinct case-insensitive word forms.
    pub unique_words: usize,
    /// Mean words per sentence; 0 when there are no sentences.
    pub average_sentence_length: f64,
    /// Mean characters per word occurrence; 0 when there are no words.
    pub average_word_length: f64,
    /// Readability score, clamped to `[0, 100]`.
    pub readability_score: f64,
    /// Longest word by character count; ties go to the first occurrence.
    /// Empty when the text has no words.
    pub longest_word: String,
    /// Shortest word by character count; ties go to the first occurrence.
    /// Empty when the text has no words.
    pub shortest_word: String,
    /// Up to ten most frequent words, count descending, first occurrence
    /// breaking ties.
    pub top_word_frequencies: Vec<WordFrequency>,
}

/// Build statistics from the tokenizer's three sequences.
///
/// The slices must come from one [`crate::text::tokenize`] call over the
/// same source text; mixing outputs of different texts produces
/// meaningless numbers.
#[tracing::instrument(skip_all, fields(words = words.len(), sentences = sentences.len()))]
pub fn build_statistics(
    paragraphs: &[String],
    sentences: &[String],
    words: &[String],
) -> TextStatistics {
    let total_words = words.len();
    let total_sentences = sentences.len();
    let total_paragraphs = paragraphs.len();

    // Case-insensitive counts, remembering where each form first appeared
    // so ranking ties resolve in reading order.
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, word) in words.iter().enumerate() {
        let entry = counts.entry(word.to_lowercase()).or_insert((0, index));
        entry.0 += 1;
    }
    let unique_words = counts.len();

    let average_sentence_length = if total_sentences == 0 {
        0.0
    } else {
        total_words as f64 / total_sentences as f64
    };

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let average_word_length = if total_words == 0 {
        0.0
    } else {
        total_chars as f64 / total_words as f64
    };

    let readability_score = readability::score(average_sentence_length, average_word_length);

    let (longest_word, shortest_word) = word_extremes(words);
    let top_word_frequencies = rank_frequencies(counts);

    TextStatistics {
        total_words,
        total_sentences,
        total_paragraphs,
        unique_words,
        average_sentence_length,
        average_word_length,
        readability_score,
        longest_word,
        shortest_word,
        top_word_frequencies,
    }
}

/// Select the longest and shortest word by character count.
///
/// Strict comparisons keep the first occurrence on ties. Both come back
/// empty when `words` is empty.
fn word_extremes(words: &[String]) -> (String, String) {
    let mut longest: Option<&String> = None;
    let mut shortest: Option<&String> = None;

    for word in words {
        let len = word.chars().count();
        if longest.is_none_or(|w| len > w.chars().count()) {
            longest = Some(word);
        }
        if shortest.is_none_or(|w| len < w.chars().count()) {
            shortest = Some(word);
        }
    }

    (
        longest.cloned().unwrap_or_default(),
        shortest.cloned().unwrap_or_default(),
    )
}

/// Rank frequency counts: count descending, first occurrence ascending,
/// truncated to [`TOP_WORD_LIMIT`].
fn rank_frequencies(counts: HashMap<String, (usize, usize)>) -> Vec<WordFrequency> {
    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_index))| (word, count, first_index))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(TOP_WORD_LIMIT);

    ranked
        .into_iter()
        .map(|(word, count, _)| WordFrequency { word, count })
        .collect()
}
