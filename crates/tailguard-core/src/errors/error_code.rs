//! ErrorCode trait for stable, machine-readable error classification.

/// Every error enum implements this so callers (the CLI exit contract,
/// downstream log scrapers) can classify failures without string matching.
pub trait ErrorCode {
    /// Returns the stable error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
