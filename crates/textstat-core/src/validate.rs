//! Input validation.
//!
//! Everything downstream of [`validate`] assumes non-empty input, so
//! [`ValidatedText`] is the only way into the pipeline: it cannot be
//! constructed outside this module.

use crate::error::{ValidationError, ValidationResult};

/// A non-empty input string, guaranteed to contain at least one
/// non-whitespace character.
///
/// Produced only by [`validate`]. The wrapped text is the raw input,
/// unchanged: validation never trims or normalizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText(String);

impl ValidatedText {
    /// The validated text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidatedText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ValidatedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate raw input before analysis.
///
/// Fails with [`ValidationError::EmptyInput`] when `raw` is empty or
/// whitespace-only; otherwise returns the input unchanged. Arbitrary
/// length and arbitrary Unicode content are accepted.
pub fn validate(raw: &str) -> ValidationResult<ValidatedText> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(ValidatedText(raw.to_string()))
}
