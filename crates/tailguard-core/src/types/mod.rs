//! Core records shared by the guardrail engine and its callers.

pub mod baseline;
pub mod decision;
pub mod measurement;
pub mod metrics;
pub mod runner;

pub use baseline::Baseline;
pub use decision::{GateDecision, GateStatus, TierId};
pub use measurement::BenchMeasurement;
pub use metrics::MetricsSnapshot;
pub use runner::RunnerIdentity;
