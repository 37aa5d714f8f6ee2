//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use tailguard_core::config::{GateOverrides, GuardFileConfig};
use tailguard_gate::{ExportRequest, GuardRequest, InputPaths};

#[derive(Parser, Debug, Default)]
#[command(
    name = "tailguard",
    version,
    about = "Tail-latency & digest guardrail checker"
)]
pub struct Args {
    /// NDJSON benchmark summary [default: artifacts/bench.jsonl]
    #[arg(long)]
    pub bench_file: Option<PathBuf>,

    /// Prometheus textfile output [default: artifacts/metrics.prom]
    #[arg(long)]
    pub metrics_file: Option<PathBuf>,

    /// Per-runner baseline JSON [default: artifacts/baselines/sample_runner.json]
    #[arg(long)]
    pub baseline_file: Option<PathBuf>,

    /// Gate profile: strict, standard, or lenient [env: PROFILE] [default: standard]
    #[arg(long)]
    pub profile: Option<String>,

    /// Override runner identifier
    #[arg(long)]
    pub runner_id: Option<String>,

    /// Override p99 multiplier [env: P99_MULTIPLIER]
    #[arg(long)]
    pub p99_multiplier: Option<f64>,

    /// Override MAD multiplier [env: MAD_MULTIPLIER]
    #[arg(long)]
    pub mad_multiplier: Option<f64>,

    /// Override epsilon slack in ms [env: EPSILON_MS]
    #[arg(long)]
    pub epsilon_ms: Option<f64>,

    /// Absolute p99 cap in ms [env: P99_BUDGET_MS]
    #[arg(long)]
    pub p99_budget_ms: Option<f64>,

    /// Force digest equality regardless of profile [env: REQUIRE_DIGEST=1]
    #[arg(long)]
    pub require_digest: bool,

    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON bundle with bench, baseline, and Prometheus metrics
    #[arg(long)]
    pub run_metrics_exporter: bool,

    /// Path to write the metrics export bundle [default: artifacts/metrics-export.json]
    #[arg(long)]
    pub metrics_export_path: Option<PathBuf>,

    /// Include auto-tuned gate suggestions in the export (implies --run-metrics-exporter)
    #[arg(long)]
    pub auto_tune: bool,
}

impl Args {
    /// Builds the run request. Paths resolve CLI > config file > default.
    pub fn into_request(self, file: Option<GuardFileConfig>) -> (GuardRequest, Option<ExportRequest>) {
        let file = file.unwrap_or_default();
        let defaults = InputPaths::default();
        let paths = InputPaths {
            bench_file: self
                .bench_file
                .or(file.paths.bench_file)
                .unwrap_or(defaults.bench_file),
            metrics_file: self
                .metrics_file
                .or(file.paths.metrics_file)
                .unwrap_or(defaults.metrics_file),
            baseline_file: self
                .baseline_file
                .or(file.paths.baseline_file)
                .unwrap_or(defaults.baseline_file),
        };

        let export = (self.run_metrics_exporter || self.auto_tune).then(|| ExportRequest {
            path: self
                .metrics_export_path
                .or(file.paths.export_path)
                .unwrap_or_else(|| ExportRequest::default().path),
            auto_tune: self.auto_tune,
        });

        let request = GuardRequest {
            paths,
            runner_id: self.runner_id,
            overrides: GateOverrides {
                profile: self.profile,
                p99_multiplier: self.p99_multiplier,
                mad_multiplier: self.mad_multiplier,
                epsilon_ms: self.epsilon_ms,
                p99_budget_ms: self.p99_budget_ms,
                force_digest: self.require_digest,
            },
            file_gate: Some(file.gate),
        };
        (request, export)
    }
}
