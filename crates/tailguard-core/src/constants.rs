//! Shared constants for the tailguard guardrail.

/// tailguard version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default NDJSON benchmark summary location.
pub const DEFAULT_BENCH_FILE: &str = "artifacts/bench.jsonl";

/// Default Prometheus textfile location.
pub const DEFAULT_METRICS_FILE: &str = "artifacts/metrics.prom";

/// Default per-runner baseline document.
pub const DEFAULT_BASELINE_FILE: &str = "artifacts/baselines/sample_runner.json";

/// Default export bundle location.
pub const DEFAULT_EXPORT_PATH: &str = "artifacts/metrics-export.json";

/// Runner id used when no identity signal is available.
pub const FALLBACK_RUNNER_ID: &str = "manual-runner";

/// Separator between runner identity pieces (`name-os-arch`).
pub const RUNNER_ID_SEPARATOR: &str = "-";

/// Absolute tolerance applied to every hard gate comparison.
pub const GATE_TOLERANCE: f64 = 1e-9;

/// The p99.9 allowance is this multiple of the p99 allowance.
pub const P999_ALLOWANCE_FACTOR: f64 = 3.0;

/// Auto-tune budget headroom over the measured p99.
pub const AUTO_TUNE_HEADROOM: f64 = 1.05;

/// Metric names that must all be present in the Prometheus textfile.
pub const REQUIRED_METRICS: [&str; 6] = [
    "lob_p50_ms",
    "lob_p95_ms",
    "lob_p99_ms",
    "lob_p999_ms",
    "lob_p9999_ms",
    "lob_publish_allowed",
];

/// Environment keys consulted through a [`crate::config::ConfigSource`].
pub mod env_keys {
    pub const P99_MULTIPLIER: &str = "P99_MULTIPLIER";
    pub const MAD_MULTIPLIER: &str = "MAD_MULTIPLIER";
    pub const EPSILON_MS: &str = "EPSILON_MS";
    pub const P99_BUDGET_MS: &str = "P99_BUDGET_MS";
    /// Forces digest enforcement when set to exactly `"1"`.
    pub const REQUIRE_DIGEST: &str = "REQUIRE_DIGEST";
    pub const PROFILE: &str = "PROFILE";
    pub const RUNNER_NAME: &str = "RUNNER_NAME";
    pub const RUNNER_OS: &str = "RUNNER_OS";
    pub const RUNNER_ARCH: &str = "RUNNER_ARCH";
    /// Log filter directive, e.g. `TAILGUARD_LOG=tailguard_gate=debug`.
    pub const LOG: &str = "TAILGUARD_LOG";
}
