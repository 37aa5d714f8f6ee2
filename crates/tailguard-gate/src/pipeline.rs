//! End-to-end guardrail run.
//!
//! Order: resolve configuration, parse inputs, load the baseline, compute the
//! allowance, evaluate. Any error aborts before a verdict exists. Exporting is
//! a separate step so a caller can publish the verdict before attempting I/O.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tailguard_core::config::{ConfigSource, GateOverrides, GateProfile, GateSection, ProfileResolver};
use tailguard_core::constants::{
    DEFAULT_BASELINE_FILE, DEFAULT_BENCH_FILE, DEFAULT_EXPORT_PATH, DEFAULT_METRICS_FILE,
};
use tailguard_core::errors::{ExportError, GuardError};
use tailguard_core::types::{Baseline, BenchMeasurement, GateDecision, MetricsSnapshot, RunnerIdentity};

use crate::allowance::{compute_allowance, Allowance};
use crate::autotune::{suggest, AutoTuneSuggestion};
use crate::baseline::load_baseline;
use crate::evaluator::{evaluate, GateInput};
use crate::export::{write_bundle, ExportBundle};
use crate::parsers::{parse_bench_measurement, parse_metrics_snapshot};

/// Locations of the three input files.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPaths {
    pub bench_file: PathBuf,
    pub metrics_file: PathBuf,
    pub baseline_file: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            bench_file: PathBuf::from(DEFAULT_BENCH_FILE),
            metrics_file: PathBuf::from(DEFAULT_METRICS_FILE),
            baseline_file: PathBuf::from(DEFAULT_BASELINE_FILE),
        }
    }
}

/// Where to write the export bundle, and whether to include auto-tune output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub path: PathBuf,
    pub auto_tune: bool,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXPORT_PATH),
            auto_tune: false,
        }
    }
}

/// A single guardrail invocation.
#[derive(Debug, Clone, Default)]
pub struct GuardRequest {
    pub paths: InputPaths,
    /// Explicit runner id; otherwise derived from the config source.
    pub runner_id: Option<String>,
    pub overrides: GateOverrides,
    /// `[gate]` table of an optional config file.
    pub file_gate: Option<GateSection>,
}

/// Everything a run computed. The decision is the verdict; the rest is
/// context for reporting and export.
#[derive(Debug, Clone)]
pub struct GuardOutcome {
    pub runner_id: RunnerIdentity,
    pub profile: GateProfile,
    pub budget_cap_ms: Option<f64>,
    pub allowance: Allowance,
    pub measurement: BenchMeasurement,
    pub metrics: MetricsSnapshot,
    pub baseline: Baseline,
    pub decision: GateDecision,
}

impl GuardRequest {
    /// Resolve, parse, and evaluate. Never writes anything.
    pub fn evaluate(&self, source: &dyn ConfigSource) -> Result<GuardOutcome, GuardError> {
        let mut resolver = ProfileResolver::new(source);
        if let Some(gate) = &self.file_gate {
            resolver = resolver.with_file(gate);
        }
        let profile = resolver.resolve(&self.overrides)?;
        let budget_cap_ms = resolver.resolve_budget_cap(self.overrides.p99_budget_ms)?;
        let runner_id = RunnerIdentity::resolve(self.runner_id.as_deref(), source);

        let span = tracing::info_span!("tailguard.run", runner_id = %runner_id, profile = %profile.name);
        let _guard = span.enter();

        let measurement = parse_bench_measurement(&self.paths.bench_file)?;
        let metrics = parse_metrics_snapshot(&self.paths.metrics_file)?;
        let baseline = load_baseline(&self.paths.baseline_file, runner_id.as_str())?;

        let allowance = compute_allowance(
            &baseline,
            profile.mad_multiplier,
            profile.p99_multiplier,
            profile.epsilon_ms,
            budget_cap_ms,
        )?;

        let decision = evaluate(&GateInput {
            runner_id: runner_id.as_str(),
            profile: &profile,
            measurement: &measurement,
            baseline: &baseline,
            allowed_p99_ms: allowance.allowed_p99_ms,
        });

        tracing::info!(
            status = %decision.status,
            measured_p99_ms = measurement.p99_ms,
            allowed_p99_ms = allowance.allowed_p99_ms,
            binding_candidate = %allowance.binding,
            failures = ?decision.failures,
            "gate evaluated"
        );

        Ok(GuardOutcome {
            runner_id,
            profile,
            budget_cap_ms,
            allowance,
            measurement,
            metrics,
            baseline,
            decision,
        })
    }
}

impl GuardOutcome {
    /// Auto-tune suggestions for this run.
    pub fn auto_tune(&self) -> AutoTuneSuggestion {
        suggest(&self.measurement, &self.baseline, self.allowance.allowed_p99_ms)
    }

    /// The export document for this run, stamped with `generated_at`.
    pub fn bundle(&self, generated_at: DateTime<Utc>, include_auto_tune: bool) -> ExportBundle<'_> {
        let bundle = ExportBundle::new(
            generated_at,
            self.runner_id.as_str(),
            &self.profile,
            self.budget_cap_ms,
            &self.decision,
            &self.measurement,
            &self.metrics,
            &self.baseline,
        );
        if include_auto_tune {
            bundle.with_auto_tune(self.auto_tune())
        } else {
            bundle
        }
    }

    /// Write the export bundle, stamped with the current time.
    pub fn export(&self, request: &ExportRequest) -> Result<(), ExportError> {
        write_bundle(&request.path, &self.bundle(Utc::now(), request.auto_tune))
    }
}
