//! Configuration system for tailguard.
//! Layered resolution: CLI > env > config file > profile preset.

pub mod file_config;
pub mod profile;
pub mod resolver;
pub mod source;

pub use file_config::{GateSection, GuardFileConfig, PathsSection};
pub use profile::{GateProfile, ProfileName};
pub use resolver::{GateOverrides, ProfileResolver, Resolved, ValueOrigin};
pub use source::{ConfigSource, MapSource, ProcessEnv};
