//! Error handling for tailguard.
//! One error enum per failure domain, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod guard_error;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use export_error::ExportError;
pub use guard_error::GuardError;
pub use input_error::InputError;
