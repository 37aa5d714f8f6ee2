//! Gate evaluator: a single linear pass over the tiers.
//!
//! Status starts at PASS; any failing tier flips it to FAIL. Tiers never
//! short-circuit each other, so the trace always reports every tier that was
//! measured. The evaluator is pure: identical inputs yield an identical
//! decision and trace.

pub mod tiers;

use tailguard_core::config::GateProfile;
use tailguard_core::constants::P999_ALLOWANCE_FACTOR;
use tailguard_core::types::{Baseline, BenchMeasurement, GateDecision, GateStatus, TierId};

pub use tiers::{DigestGate, P9999Advisory, P999Gate, P99Gate, TierGate, TierOutcome, TierVerdict};

/// Everything one evaluation needs.
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub runner_id: &'a str,
    pub profile: &'a GateProfile,
    pub measurement: &'a BenchMeasurement,
    pub baseline: &'a Baseline,
    pub allowed_p99_ms: f64,
}

impl GateInput<'_> {
    pub fn allowed_p999_ms(&self) -> f64 {
        self.allowed_p99_ms * P999_ALLOWANCE_FACTOR
    }
}

/// Tiers in evaluation (and trace) order.
fn tiers() -> [&'static dyn TierGate; 4] {
    [&P99Gate, &DigestGate, &P999Gate, &P9999Advisory]
}

/// Evaluate every tier and assemble the decision.
pub fn evaluate(input: &GateInput<'_>) -> GateDecision {
    let mut trace = header(input);
    let mut failures = Vec::new();
    let mut digest_ok = true;

    for tier in tiers() {
        let outcome = tier.evaluate(input);
        if outcome.verdict == TierVerdict::Fail {
            failures.push(outcome.tier);
            if outcome.tier == TierId::DigestGate {
                digest_ok = false;
            }
        }
        trace.extend(outcome.lines);
    }

    GateDecision {
        status: if failures.is_empty() {
            GateStatus::Pass
        } else {
            GateStatus::Fail
        },
        allowed_p99_ms: input.allowed_p99_ms,
        allowed_p999_ms: input.allowed_p999_ms(),
        digest_ok,
        failures,
        trace,
    }
}

/// Fixed-order context lines preceding the tier lines.
fn header(input: &GateInput<'_>) -> Vec<String> {
    let m = input.measurement;
    let p = input.profile;
    vec![
        format!("runner: {}", input.runner_id),
        format!("profile: {} ({})", p.name, p.description),
        format!("measured_p99_ms:    {:.4}", m.p99_ms),
        format!("measured_p999_ms:   {:.4}", m.p999_ms),
        format!("measured_p9999_ms:  {:.4}", m.p9999_ms),
        format!("allowed_p99_ms:     {:.4}", input.allowed_p99_ms),
        format!("median_p99_ms: {}", stat(input.baseline.median_p99_ms)),
        format!("mad_p99_ms: {}", stat(input.baseline.mad_p99_ms)),
        format!("p99_multiplier: {}", p.p99_multiplier),
        format!("mad_multiplier: {}", p.mad_multiplier),
        format!("epsilon_ms: {}", p.epsilon_ms),
    ]
}

fn stat(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use tailguard_core::config::ProfileName;

    use super::*;

    #[test]
    fn header_lines_are_fixed_order() {
        let profile = ProfileName::Standard.preset();
        let measurement = BenchMeasurement::with_p99(450.0);
        let baseline = Baseline::new(400.0, 20.0);
        let input = GateInput {
            runner_id: "manual-runner",
            profile: &profile,
            measurement: &measurement,
            baseline: &baseline,
            allowed_p99_ms: 460.05,
        };
        let lines = header(&input);
        assert_eq!(lines[0], "runner: manual-runner");
        assert_eq!(lines[1], "profile: standard (PR gate)");
        assert_eq!(lines[2], "measured_p99_ms:    450.0000");
        assert_eq!(lines[5], "allowed_p99_ms:     460.0500");
        assert_eq!(lines[6], "median_p99_ms: 400");
        assert_eq!(lines[10], "epsilon_ms: 0.05");
    }
}
