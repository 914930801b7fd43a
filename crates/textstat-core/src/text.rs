//! Text segmentation.
//!
//! Splits validated input into paragraphs, sentences, and words. The
//! three sequences are independent views of the same source text;
//! nothing here counts or ranks, that belongs to [`crate::stats`].
//!
//! Sentence splitting is deliberately simple: every `.`, `!`, or `?`
//! followed by whitespace or end-of-text closes a sentence. There is no
//! abbreviation list and no decimal/URL awareness, so "Dr. Smith" splits
//! into two sentences.

use crate::validate::ValidatedText;

/// Ordered segmentation of one validated text.
///
/// Words retain their original casing; case normalization for counting
/// happens in the statistics builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText {
    /// Paragraphs, trimmed, in reading order.
    pub paragraphs: Vec<String>,
    /// Sentences, trimmed, in reading order.
    pub sentences: Vec<String>,
    /// Words with leading/trailing punctuation stripped, in reading order.
    pub words: Vec<String>,
}

/// Segment a validated text into paragraphs, sentences, and words.
///
/// Deterministic and total: identical input always yields identical
/// sequences, and no valid input can fail.
#[tracing::instrument(skip_all, fields(text_len = text.as_str().len()))]
pub fn tokenize(text: &ValidatedText) -> TokenizedText {
    let paragraphs = split_paragraphs(text.as_str());
    let sentences = paragraphs
        .iter()
        .flat_map(|p| split_sentences(p))
        .collect();
    let words = extract_words(text.as_str());

    TokenizedText {
        paragraphs,
        sentences,
        words,
    }
}

/// Split text into paragraphs separated by one or more blank lines.
///
/// A line containing only whitespace counts as blank. Each paragraph is
/// trimmed; empty segments are discarded.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            push_paragraph(&mut paragraphs, &mut current);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    push_paragraph(&mut paragraphs, &mut current);

    paragraphs
}

fn push_paragraph(paragraphs: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}

/// Split text into sentences on `.`, `!`, or `?`.
///
/// A terminator followed by whitespace or end-of-text closes a sentence.
/// Trailing text without a terminator still counts as a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        if is_sentence_terminator(ch) {
            let at_boundary = match chars.peek() {
                Some(next) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                push_sentence(&mut sentences, &mut current);
            }
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Extract words from text, splitting on whitespace runs and stripping
/// leading/trailing punctuation from each token.
///
/// Internal hyphens and apostrophes stay part of the word. Tokens that
/// become empty after stripping are discarded. Original casing is kept.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(ToString::to_string)
        .collect()
}
