//! Core library for textstat.
//!
//! This crate provides the text-analysis pipeline used by the `textstat`
//! CLI and any downstream consumers: validation, tokenization, statistics
//! aggregation, readability interpretation, report assembly, and the
//! export serializers.
//!
//! # Modules
//!
//! - [`validate`] - Input validation, the pipeline's only failure point
//! - [`text`] - Paragraph/sentence/word segmentation
//! - [`stats`] - Counts, averages, extremes, frequency ranking
//! - [`readability`] - Score formula and difficulty bands
//! - [`report`] - Report assembly with provenance
//! - [`analysis`] - One-call pipeline orchestration
//! - [`export`] - JSON/text/CSV/summary renderings
//! - [`markdown`] - CommonMark-to-prose stripping for `.md` inputs
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use chrono::Utc;
//! use textstat_core::analysis::run_analysis;
//!
//! let report = run_analysis("Hello world. This is a test.", "Manual Input", Utc::now())
//!     .expect("non-empty input");
//!
//! assert_eq!(report.statistics.total_words, 6);
//! assert_eq!(report.statistics.total_sentences, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod markdown;
pub mod readability;
pub mod report;
pub mod stats;
pub mod text;
pub mod validate;

pub use analysis::run_analysis;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, ExportError, ExportResult, ValidationError, ValidationResult,
};
pub use export::ExportFormat;
pub use readability::ReadabilityLevel;
pub use report::AnalysisReport;
pub use stats::{TextStatistics, WordFrequency};
pub use validate::ValidatedText;

/// Default cap on input size: 5 MiB.
///
/// Large enough for any document this pipeline is meant for, small enough
/// to fail fast on accidental binary or log input.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
