//! Top-level guardrail error.

use super::error_code::ErrorCode;
use super::{ConfigError, ExportError, InputError};

/// Any fatal error that aborts a guardrail run before a verdict is produced.
/// Aggregates subsystem errors via `From` conversions.
///
/// A FAIL verdict is not an error and never appears here.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl ErrorCode for GuardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}
