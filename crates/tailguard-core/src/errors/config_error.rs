//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while resolving the effective gate configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment {key} must be float-compatible, got '{value}'")]
    NonNumericEnv { key: String, value: String },

    #[error("unknown profile '{name}' (expected one of: strict, standard, lenient)")]
    UnknownProfile { name: String },

    #[error("config file {path} could not be read: {message}")]
    FileUnreadable { path: String, message: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("unable to compute allowance; baseline missing usable stats and no budget cap given")]
    NoAllowance,
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
