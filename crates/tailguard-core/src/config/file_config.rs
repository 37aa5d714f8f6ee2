//! Optional TOML configuration file (`tailguard.toml`).
//!
//! ```toml
//! [gate]
//! profile = "strict"
//! epsilon_ms = 0.04
//!
//! [paths]
//! baseline_file = "artifacts/baselines/ci.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level file configuration. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GuardFileConfig {
    pub gate: GateSection,
    pub paths: PathsSection,
}

/// `[gate]` table: sits below env and above the preset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GateSection {
    pub profile: Option<String>,
    pub p99_multiplier: Option<f64>,
    pub mad_multiplier: Option<f64>,
    pub epsilon_ms: Option<f64>,
    pub p99_budget_ms: Option<f64>,
    pub require_digest: Option<bool>,
}

/// `[paths]` table: input/output locations, below CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    pub bench_file: Option<PathBuf>,
    pub metrics_file: Option<PathBuf>,
    pub baseline_file: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

impl GuardFileConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_at(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::from_toml_at(content, "<string>")
    }

    fn from_toml_at(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let numeric = [
            ("gate.p99_multiplier", self.gate.p99_multiplier),
            ("gate.mad_multiplier", self.gate.mad_multiplier),
            ("gate.epsilon_ms", self.gate.epsilon_ms),
            ("gate.p99_budget_ms", self.gate.p99_budget_ms),
        ];
        for (field, value) in numeric {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ConfigError::InvalidValue {
                        field: field.to_string(),
                        message: format!("must be a finite non-negative number, got {v}"),
                    });
                }
            }
        }
        Ok(())
    }
}
