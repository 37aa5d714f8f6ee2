//! Export bundle I/O errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while persisting the export bundle.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize export bundle: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write export bundle {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
