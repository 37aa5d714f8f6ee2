//! Input errors: missing, malformed, or incomplete input files.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors raised while reading the bench, metrics, or baseline inputs.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{kind} file {path} not found")]
    FileNotFound { kind: &'static str, path: PathBuf },

    #[error("failed to read {kind} file {path}: {source}")]
    Unreadable {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bench file {path} is empty")]
    EmptyBench { path: PathBuf },

    #[error("bench file {path} contains no valid JSON line")]
    NoJsonLine { path: PathBuf },

    #[error("bench payload missing '{field}'")]
    MissingBenchField { field: &'static str },

    #[error("bench '{field}' not a float: {value}")]
    NonNumericBenchField { field: &'static str, value: String },

    #[error("metric '{key}' expected numeric value, got '{value}'")]
    NonNumericMetric { key: String, value: String },

    #[error("metrics file {path} missing keys: {}", .missing.join(", "))]
    MissingMetrics { path: PathBuf, missing: Vec<String> },

    #[error("baseline file {path} not found. Run golden calibration first.")]
    BaselineNotFound { path: PathBuf },

    #[error("baseline file {path} is not valid JSON: {message}")]
    BaselineInvalidJson { path: PathBuf, message: String },

    #[error("no baseline entry for runner '{runner_id}' and no defaults fallback")]
    NoBaselineEntry { runner_id: String },

    #[error("baseline entry missing '{field}'")]
    BaselineMissingField { field: &'static str },

    #[error("baseline entry '{field}' not a float: {value}")]
    BaselineNonNumericField { field: &'static str, value: String },

    #[error("baseline entry is malformed: {message}")]
    BaselineMalformed { message: String },
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
