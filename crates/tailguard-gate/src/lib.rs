//! # tailguard-gate
//!
//! The tail-latency guardrail engine. Reads a benchmark summary, a Prometheus
//! textfile, and a per-runner baseline; derives an allowed p99 ceiling from the
//! tightest of several independent candidates; and applies a cascading gate
//! (hard p99, optional digest equality, derived p99.9, advisory p99.99).
//!
//! Everything is synchronous and side-effect free except the optional export
//! bundle write.

pub mod allowance;
pub mod autotune;
pub mod baseline;
pub mod evaluator;
pub mod export;
pub mod parsers;
pub mod pipeline;

pub use allowance::{compute_allowance, compute_allowed, Allowance, CandidateSource};
pub use autotune::{suggest, AutoTuneSuggestion};
pub use baseline::load_baseline;
pub use evaluator::{evaluate, GateInput};
pub use export::{write_bundle, ExportBundle};
pub use parsers::{parse_bench_measurement, parse_metrics_snapshot};
pub use pipeline::{ExportRequest, GuardOutcome, GuardRequest, InputPaths};
