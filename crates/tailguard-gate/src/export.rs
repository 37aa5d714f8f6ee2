//! Export bundle writer.
//!
//! The bundle is a single JSON document with sorted keys, consumed by
//! dashboards and badge generators. The write is all-or-nothing: content goes
//! to a sibling temp file that is renamed into place.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tailguard_core::config::GateProfile;
use tailguard_core::errors::ExportError;
use tailguard_core::types::{Baseline, BenchMeasurement, GateDecision, GateStatus, MetricsSnapshot};

use crate::autotune::AutoTuneSuggestion;

/// Resolved gate configuration as exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateSummary {
    pub allowed_p99_ms: f64,
    pub allowed_p999_ms: f64,
    pub p99_multiplier: f64,
    pub mad_multiplier: f64,
    pub epsilon_ms: f64,
    pub require_digest: bool,
    pub p99_budget_ms: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle<'a> {
    pub generated_at: String,
    pub status: GateStatus,
    pub runner: &'a str,
    pub profile: &'a str,
    pub gates: GateSummary,
    pub bench: &'a BenchMeasurement,
    pub metrics: &'a MetricsSnapshot,
    pub baseline: &'a Baseline,
    pub trace: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune: Option<AutoTuneSuggestion>,
}

impl<'a> ExportBundle<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generated_at: DateTime<Utc>,
        runner: &'a str,
        profile: &'a GateProfile,
        budget_cap_ms: Option<f64>,
        decision: &'a GateDecision,
        bench: &'a BenchMeasurement,
        metrics: &'a MetricsSnapshot,
        baseline: &'a Baseline,
    ) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            status: decision.status,
            runner,
            profile: profile.name.as_str(),
            gates: GateSummary {
                allowed_p99_ms: round4(decision.allowed_p99_ms),
                allowed_p999_ms: round4(decision.allowed_p999_ms),
                p99_multiplier: profile.p99_multiplier,
                mad_multiplier: profile.mad_multiplier,
                epsilon_ms: profile.epsilon_ms,
                require_digest: profile.require_digest,
                p99_budget_ms: budget_cap_ms,
            },
            bench,
            metrics,
            baseline,
            trace: &decision.trace,
            auto_tune: None,
        }
    }

    pub fn with_auto_tune(mut self, suggestion: AutoTuneSuggestion) -> Self {
        self.auto_tune = Some(suggestion);
        self
    }

    /// Pretty JSON with every object's keys sorted, newline-terminated.
    pub fn to_json(&self) -> Result<String, ExportError> {
        // serde_json::Map is a BTreeMap, so going through Value sorts keys.
        let value = serde_json::to_value(self)?;
        let mut out = serde_json::to_string_pretty(&value)?;
        out.push('\n');
        Ok(out)
    }
}

fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

/// Serialize and persist `bundle` at `path`, creating parent directories.
pub fn write_bundle(path: &Path, bundle: &ExportBundle<'_>) -> Result<(), ExportError> {
    let content = bundle.to_json()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let staging = staging_path(path);
    let write = std::fs::write(&staging, content).and_then(|()| std::fs::rename(&staging, path));
    if let Err(source) = write {
        let _ = std::fs::remove_file(&staging);
        return Err(ExportError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    tracing::info!(path = %path.display(), status = %bundle.status, "wrote export bundle");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
