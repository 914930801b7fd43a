//! Error types for textstat-core.

use thiserror::Error;

/// Errors that can occur when validating raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is empty or contains only whitespace.
    #[error("input is empty or contains only whitespace")]
    EmptyInput,
}

/// Result type alias using [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors that can occur while exporting a report.
///
/// Export failures never invalidate the report itself; the caller can
/// retry the same report against another destination.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The destination could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using [`ExportError`].
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
