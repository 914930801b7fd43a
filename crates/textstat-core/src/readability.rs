//! Readability scoring and interpretation.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (chars/word / 3)`
//!
//! Flesch Reading Ease, with average word length divided by three standing
//! in for syllables per word (roughly three characters per syllable in
//! English prose). Higher score = easier text. The result is clamped into
//! `[0, 100]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Compute a readability score from the two tokenizer averages.
///
/// Monotonically decreasing in both arguments: longer sentences or longer
/// words push the score down. Always in `[0, 100]`.
pub fn score(avg_sentence_length: f64, avg_word_length: f64) -> f64 {
    let raw = 84.6f64.mul_add(
        -(avg_word_length / 3.0),
        1.015f64.mul_add(-avg_sentence_length, 206.835),
    );
    raw.clamp(0.0, 100.0)
}

/// Reading difficulty band for a score in `[0, 100]`.
///
/// Bands follow the Flesch Reading Ease convention: every score maps to
/// exactly one band, and a lower score never maps to an easier band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// 90–100: easily understood by an average 11-year-old.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// 70–89: conversational English.
    #[serde(rename = "Easy")]
    Easy,
    /// 50–69: plain English.
    #[serde(rename = "Standard")]
    Standard,
    /// 30–49: best understood by college-level readers.
    #[serde(rename = "Difficult")]
    Difficult,
    /// 0–29: dense academic or technical prose.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    /// Map a score to its band. Scores outside `[0, 100]` are clamped
    /// first, so the mapping is total over all finite inputs.
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 100.0);
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 70.0 {
            Self::Easy
        } else if score >= 50.0 {
            Self::Standard
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable label for this band.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Standard => "Standard",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
