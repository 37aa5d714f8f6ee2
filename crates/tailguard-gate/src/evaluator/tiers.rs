//! The individual gate tiers.

use tailguard_core::constants::GATE_TOLERANCE;
use tailguard_core::types::TierId;

use super::GateInput;

/// How a tier judged the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierVerdict {
    Pass,
    Fail,
    /// Recorded but never affects status.
    Informational,
    /// Tier had nothing to judge (unmeasured value). Emits no trace lines.
    NotMeasured,
}

/// One tier's verdict plus the trace lines it contributes.
#[derive(Debug, Clone, PartialEq)]
pub struct TierOutcome {
    pub tier: TierId,
    pub verdict: TierVerdict,
    pub lines: Vec<String>,
}

impl TierOutcome {
    fn new(tier: TierId, verdict: TierVerdict, lines: Vec<String>) -> Self {
        Self { tier, verdict, lines }
    }
}

/// A single tier of the cascading gate.
pub trait TierGate: Send + Sync {
    fn id(&self) -> TierId;
    fn evaluate(&self, input: &GateInput<'_>) -> TierOutcome;
}

fn breached(measured: f64, allowed: f64) -> bool {
    measured > allowed + GATE_TOLERANCE
}

fn comparison_line(tier: TierId, measured: f64, allowed: f64) -> (TierVerdict, String) {
    if breached(measured, allowed) {
        (
            TierVerdict::Fail,
            format!("{tier}: FAIL ({measured:.4} ms > {allowed:.4} ms)"),
        )
    } else {
        (
            TierVerdict::Pass,
            format!("{tier}: PASS ({measured:.4} ms ≤ {allowed:.4} ms)"),
        )
    }
}

/// Hard p99 gate.
pub struct P99Gate;

impl TierGate for P99Gate {
    fn id(&self) -> TierId {
        TierId::P99Gate
    }

    fn evaluate(&self, input: &GateInput<'_>) -> TierOutcome {
        let (verdict, line) =
            comparison_line(self.id(), input.measurement.p99_ms, input.allowed_p99_ms);
        TierOutcome::new(self.id(), verdict, vec![line])
    }
}

/// Digest equality. Enforced only when the profile requires it and the
/// baseline carries a reference digest; otherwise informational.
pub struct DigestGate;

impl TierGate for DigestGate {
    fn id(&self) -> TierId {
        TierId::DigestGate
    }

    fn evaluate(&self, input: &GateInput<'_>) -> TierOutcome {
        let measured = input.measurement.digest.as_deref();
        let shown = measured.unwrap_or("none");
        let reference = input.baseline.reference_digest();

        let mut lines = Vec::new();
        if let Some(r) = reference {
            lines.push(format!("digest_ref: {r}"));
        }

        match reference {
            Some(r) if input.profile.require_digest => {
                lines.push(format!("digest_measured: {shown}"));
                if measured == Some(r) {
                    lines.push(format!("{}: PASS", self.id()));
                    TierOutcome::new(self.id(), TierVerdict::Pass, lines)
                } else {
                    lines.push(format!("{}: FAIL (measured {shown} != reference {r})", self.id()));
                    TierOutcome::new(self.id(), TierVerdict::Fail, lines)
                }
            }
            Some(r) if measured != Some(r) => {
                lines.push(format!("digest_measured: {shown} (informational, mismatch)"));
                TierOutcome::new(self.id(), TierVerdict::Informational, lines)
            }
            _ => {
                lines.push(format!("digest_measured: {shown} (informational)"));
                TierOutcome::new(self.id(), TierVerdict::Informational, lines)
            }
        }
    }
}

/// Derived p99.9 gate: `allowed_p999 = 3 * allowed_p99`. Skipped entirely
/// when p99.9 was not measured.
pub struct P999Gate;

impl TierGate for P999Gate {
    fn id(&self) -> TierId {
        TierId::P999Gate
    }

    fn evaluate(&self, input: &GateInput<'_>) -> TierOutcome {
        match input.measurement.p999() {
            Some(p999) => {
                let (verdict, line) = comparison_line(self.id(), p999, input.allowed_p999_ms());
                TierOutcome::new(self.id(), verdict, vec![line])
            }
            None => TierOutcome::new(self.id(), TierVerdict::NotMeasured, Vec::new()),
        }
    }
}

/// p99.99 is observational only: sample counts at that quantile are too small
/// for a hard gate.
pub struct P9999Advisory;

impl TierGate for P9999Advisory {
    fn id(&self) -> TierId {
        TierId::P9999Advisory
    }

    fn evaluate(&self, input: &GateInput<'_>) -> TierOutcome {
        match input.measurement.p9999() {
            Some(p9999) => TierOutcome::new(
                self.id(),
                TierVerdict::Informational,
                vec![format!("{}: {p9999:.4} ms (informational)", self.id())],
            ),
            None => TierOutcome::new(self.id(), TierVerdict::NotMeasured, Vec::new()),
        }
    }
}
